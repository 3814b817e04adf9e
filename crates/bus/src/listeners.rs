//! Namespaced event subscriptions.
//!
//! A widget subscribes its field to a few event kinds under a private
//! namespace and later drops all of them with one call, without disturbing
//! subscriptions other code made on the same field.

use core_types::DomEventKind;
use input_core::InputId;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Subscription {
    target: InputId,
    kind: DomEventKind,
    namespace: String,
}

#[derive(Clone, Debug, Default)]
pub struct Listeners {
    subs: Vec<Subscription>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribing the same (target, kind, namespace) twice registers it twice.
    pub fn subscribe(&mut self, target: InputId, kind: DomEventKind, namespace: &str) {
        log::trace!(target: "bus.listeners", "subscribe {target:?} {kind:?} .{namespace}");
        self.subs.push(Subscription {
            target,
            kind,
            namespace: namespace.to_string(),
        });
    }

    /// Remove every subscription on `target` under `namespace`. Returns how
    /// many were removed.
    pub fn unsubscribe_namespace(&mut self, target: InputId, namespace: &str) -> usize {
        let before = self.subs.len();
        self.subs
            .retain(|s| !(s.target == target && s.namespace == namespace));
        let removed = before - self.subs.len();
        log::trace!(target: "bus.listeners", "unsubscribe {target:?} .{namespace}: {removed} removed");
        removed
    }

    pub fn is_subscribed(&self, target: InputId, kind: DomEventKind, namespace: &str) -> bool {
        self.subs
            .iter()
            .any(|s| s.target == target && s.kind == kind && s.namespace == namespace)
    }

    /// Number of handlers a `kind` event on `target` would reach.
    pub fn count(&self, target: InputId, kind: DomEventKind) -> usize {
        self.subs
            .iter()
            .filter(|s| s.target == target && s.kind == kind)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubscribe_only_touches_its_namespace() {
        let mut l = Listeners::new();
        let field = InputId::from_raw(1);
        l.subscribe(field, DomEventKind::Change, "picker");
        l.subscribe(field, DomEventKind::Keyup, "picker");
        l.subscribe(field, DomEventKind::Change, "validation");

        assert_eq!(l.count(field, DomEventKind::Change), 2);
        assert_eq!(l.unsubscribe_namespace(field, "picker"), 2);
        assert!(!l.is_subscribed(field, DomEventKind::Keyup, "picker"));
        assert!(l.is_subscribed(field, DomEventKind::Change, "validation"));

        assert_eq!(l.unsubscribe_namespace(field, "picker"), 0);
    }

    #[test]
    fn other_targets_are_independent() {
        let mut l = Listeners::new();
        l.subscribe(InputId::from_raw(1), DomEventKind::Change, "picker");
        assert_eq!(l.unsubscribe_namespace(InputId::from_raw(2), "picker"), 0);
        assert!(!l.is_empty());
    }
}
