pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub NodeId);

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Document { id, .. } => *id = new_id,
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
            Node::Comment { id, .. } => *id = new_id,
        }
    }

    /// Element tag name, or `None` for non-element nodes.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_element_named(&self, tag: &str) -> bool {
        self.tag_name().is_some_and(|n| n.eq_ignore_ascii_case(tag))
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } => Some(children),
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }
}
