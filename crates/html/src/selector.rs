//! A small subset of CSS selectors, enough to locate form controls inside a
//! widget's element.
//!
//! Supported grammar:
//! - type selectors (`input`) and the universal selector (`*`)
//! - `#id`, `.class`, `[attr]` and `[attr=value]` (value optionally quoted)
//! - the descendant (whitespace) and child (`>`) combinators
//! - a leading `>` anchoring the first compound to direct children of the scope

use crate::Node;
use crate::dom_utils::{attr, has_attr, has_class};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Simple {
    Tag(String),
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Step {
    combinator: Combinator,
    parts: Vec<Simple>,
}

/// A parsed selector, relative to some scope element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    /// Parse `source`. Returns `None` for empty or unsupported selectors.
    pub fn parse(source: &str) -> Option<Self> {
        let mut steps = Vec::new();
        let mut pending = Combinator::Descendant;
        let mut chars = source.trim().chars().peekable();

        while let Some(&ch) = chars.peek() {
            match ch {
                c if c.is_ascii_whitespace() => {
                    chars.next();
                }
                '>' => {
                    chars.next();
                    if pending == Combinator::Child {
                        return None;
                    }
                    pending = Combinator::Child;
                }
                _ => {
                    let parts = parse_compound(&mut chars)?;
                    steps.push(Step {
                        combinator: pending,
                        parts,
                    });
                    pending = Combinator::Descendant;
                }
            }
        }

        // A dangling `>` has nothing to apply to.
        if steps.is_empty() || pending == Combinator::Child {
            return None;
        }
        Some(Self { steps })
    }

    /// First element under `scope` (excluding `scope` itself) in document order
    /// that matches this selector.
    pub fn query<'a>(&self, scope: &'a Node) -> Option<&'a Node> {
        fn walk<'a>(sel: &Selector, chain: &mut Vec<&'a Node>, node: &'a Node) -> Option<&'a Node> {
            chain.push(node);
            let pos = chain.len() - 1;
            if matches!(node, Node::Element { .. }) && sel.matches_at(chain, pos, sel.steps.len() - 1)
            {
                chain.pop();
                return Some(node);
            }
            for c in node.children() {
                if let Some(found) = walk(sel, chain, c) {
                    chain.pop();
                    return Some(found);
                }
            }
            chain.pop();
            None
        }

        let mut chain = vec![scope];
        scope.children().iter().find_map(|c| walk(self, &mut chain, c))
    }

    // `chain[0]` is the scope; candidates sit at positions >= 1.
    fn matches_at(&self, chain: &[&Node], pos: usize, k: usize) -> bool {
        let step = &self.steps[k];
        if !step.parts.iter().all(|p| matches_simple(chain[pos], p)) {
            return false;
        }
        match (step.combinator, k) {
            (Combinator::Child, 0) => pos == 1,
            (Combinator::Descendant, 0) => true,
            (Combinator::Child, _) => pos >= 2 && self.matches_at(chain, pos - 1, k - 1),
            (Combinator::Descendant, _) => (1..pos).rev().any(|p| self.matches_at(chain, p, k - 1)),
        }
    }
}

/// Convenience wrapper: parse `selector` and query it under `scope`.
pub fn query_selector<'a>(scope: &'a Node, selector: &str) -> Option<&'a Node> {
    let Some(sel) = Selector::parse(selector) else {
        log::debug!(target: "html.selector", "unsupported selector {selector:?}");
        return None;
    };
    sel.query(scope)
}

fn matches_simple(node: &Node, part: &Simple) -> bool {
    match part {
        Simple::Tag(t) => t == "*" || node.is_element_named(t),
        Simple::Id(id) => attr(node, "id") == Some(id.as_str()),
        Simple::Class(c) => has_class(node, c),
        Simple::Attr { name, value: None } => has_attr(node, name),
        Simple::Attr {
            name,
            value: Some(v),
        } => attr(node, name) == Some(v.as_str()),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let mut out = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        out.push(c);
        chars.next();
    }
    (!out.is_empty()).then_some(out)
}

fn parse_compound(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<Vec<Simple>> {
    let mut parts = Vec::new();

    if chars.peek() == Some(&'*') {
        chars.next();
        parts.push(Simple::Tag("*".to_string()));
    } else if chars.peek().is_some_and(|&c| is_ident_char(c)) {
        parts.push(Simple::Tag(take_ident(chars)?));
    }

    while let Some(&c) = chars.peek() {
        match c {
            '#' => {
                chars.next();
                parts.push(Simple::Id(take_ident(chars)?));
            }
            '.' => {
                chars.next();
                parts.push(Simple::Class(take_ident(chars)?));
            }
            '[' => {
                chars.next();
                parts.push(parse_attr(chars)?);
            }
            c if c.is_ascii_whitespace() || c == '>' => break,
            _ => return None,
        }
    }

    (!parts.is_empty()).then_some(parts)
}

fn parse_attr(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<Simple> {
    let name = take_ident(chars)?;
    match chars.next()? {
        ']' => Some(Simple::Attr { name, value: None }),
        '=' => {
            let quote = match chars.peek() {
                Some(&q) if q == '"' || q == '\'' => {
                    chars.next();
                    Some(q)
                }
                _ => None,
            };
            let mut value = String::new();
            loop {
                let c = chars.next()?;
                match quote {
                    Some(q) if c == q => {
                        if chars.next()? != ']' {
                            return None;
                        }
                        break;
                    }
                    None if c == ']' => break,
                    _ => value.push(c),
                }
            }
            Some(Simple::Attr {
                name,
                value: Some(value),
            })
        }
        _ => None,
    }
}
