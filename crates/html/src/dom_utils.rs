use crate::Node;

/// Value of attribute `name` (ASCII case-insensitive), if present with a value.
pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

pub fn has_class(node: &Node, class: &str) -> bool {
    attr(node, "class").is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
}
