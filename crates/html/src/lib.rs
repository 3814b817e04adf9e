//! Minimal DOM tree for hosting form controls: node types, attribute helpers,
//! id traversal and a small selector engine.

pub mod dom_utils;
pub mod selector;
pub mod traverse;

mod types;

pub use crate::dom_utils::{attr, has_attr, has_class};
pub use crate::selector::{Selector, query_selector};
pub use crate::traverse::{assign_node_ids, find_node_by_id};
pub use crate::types::{Id, Node, NodeId};
