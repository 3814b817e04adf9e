use crate::{Id, Node};

/// Give every node still carrying `Id(0)` a fresh id, in document order.
///
/// The document root keeps `Id(0)`; numbering for the rest starts at 1.
pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32, is_root: bool) {
        if !is_root && node.id() == Id(0) {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next, false);
            }
        }
    }

    let mut next = max_node_id(root).wrapping_add(1).max(1);
    walk(root, &mut next, true);
}

fn max_node_id(node: &Node) -> u32 {
    node.children()
        .iter()
        .map(max_node_id)
        .fold(node.id().0, u32::max)
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(name: &str, children: Vec<Node>) -> Node {
        Node::Element {
            id: Id(0),
            name: name.to_string(),
            attributes: Vec::new(),
            children,
        }
    }

    #[test]
    fn assigns_ids_in_document_order() {
        let mut root = Node::Document {
            id: Id(0),
            children: vec![el("div", vec![el("input", Vec::new())]), el("p", Vec::new())],
        };
        assign_node_ids(&mut root);

        let ids: Vec<u32> = {
            fn collect(n: &Node, out: &mut Vec<u32>) {
                out.push(n.id().0);
                for c in n.children() {
                    collect(c, out);
                }
            }
            let mut out = Vec::new();
            collect(&root, &mut out);
            out
        };
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn keeps_existing_ids_and_avoids_collisions() {
        let mut input = el("input", Vec::new());
        input.set_id(Id(5));
        let mut root = Node::Document {
            id: Id(0),
            children: vec![el("div", vec![input])],
        };
        assign_node_ids(&mut root);

        assert!(find_node_by_id(&root, Id(5)).is_some_and(|n| n.is_element_named("input")));
        assert!(find_node_by_id(&root, Id(6)).is_some_and(|n| n.is_element_named("div")));
    }
}
