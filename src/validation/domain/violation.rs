//! Constraint-violation trees produced by class validation.

use super::result::ErrorDetail;

/// A node in the violation tree for one field.
///
/// Own violations are stored in declaration order as `(constraint, message)`
/// pairs. Children describe nested objects or array elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViolationNode {
    property: String,
    constraints: Vec<(String, String)>,
    children: Vec<ViolationNode>,
}

impl ViolationNode {
    /// Creates an empty node for the named property.
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            constraints: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds a violated constraint.
    #[must_use]
    pub fn with_constraint(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.push_constraint(name, message);
        self
    }

    /// Adds a child node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a violated constraint in place.
    pub fn push_constraint(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.constraints.push((name.into(), message.into()));
    }

    /// Appends child nodes in place.
    pub fn extend_children(&mut self, children: impl IntoIterator<Item = Self>) {
        self.children.extend(children);
    }

    /// Returns the property name.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the violated constraints as `(name, message)` pairs.
    #[must_use]
    pub fn constraints(&self) -> &[(String, String)] {
        &self.constraints
    }

    /// Returns the child nodes.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns `true` when the node carries no violation at any depth.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty() && self.children.iter().all(Self::is_empty)
    }
}

/// Flattens a violation forest into error details.
///
/// Traversal is depth-first pre-order: a node's own violations precede those
/// of its children. Paths are dot-joined from the root, and each
/// `(field, constraint)` pair yields one detail typed by the constraint name.
///
/// # Examples
///
/// ```
/// use zyro_utils::validation::domain::{ViolationNode, flatten_violations};
///
/// let tree = vec![
///     ViolationNode::new("address")
///         .with_child(ViolationNode::new("city").with_constraint("isString", "city must be a string")),
/// ];
/// let details = flatten_violations(&tree);
/// assert_eq!(details.len(), 1);
/// assert_eq!(details[0].path, "address.city");
/// ```
#[must_use]
pub fn flatten_violations(nodes: &[ViolationNode]) -> Vec<ErrorDetail> {
    let mut details = Vec::new();
    collect(nodes, "", &mut details);
    details
}

fn collect(nodes: &[ViolationNode], parent: &str, details: &mut Vec<ErrorDetail>) {
    for node in nodes {
        let path = if parent.is_empty() {
            node.property.clone()
        } else {
            format!("{parent}.{}", node.property)
        };

        details.extend(
            node.constraints
                .iter()
                .map(|(name, message)| ErrorDetail::new(path.clone(), message.clone()).with_kind(name.clone())),
        );

        collect(&node.children, &path, details);
    }
}
