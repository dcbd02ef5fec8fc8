use crate::operand::FieldRef;
use planner::query::ast::node::QueryNode;
use tracing::debug;

/// Path of the enclosing nested document for a nested attribute: the
/// segment before the first dot of the property path (or of the encoded
/// field name when the path is unqualified).
pub fn nested_path(field: &FieldRef) -> Option<String> {
    let attribute = field.attribute?;
    if !attribute.nested {
        return None;
    }

    if let Some(root) = field.path.nested_root() {
        return Some(root.to_string());
    }

    let encoded = attribute.encoded_name();
    match encoded.split_once('.') {
        Some((root, _)) => Some(root.to_string()),
        None => {
            debug!(
                "Attribute '{}' is marked nested but has no parent path",
                attribute.name
            );
            None
        }
    }
}

/// Wraps the leaf built for `field`. Called once per leaf.
pub fn wrap(field: &FieldRef, node: QueryNode) -> QueryNode {
    match nested_path(field) {
        Some(path) => QueryNode::nested(&path, node),
        None => node,
    }
}
