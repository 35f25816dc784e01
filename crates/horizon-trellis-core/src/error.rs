//! Error types for Horizon Trellis.

use crate::descriptor::HostKind;
use crate::node::NodeId;

/// Result type alias for widget construction, tree mutation and rendering.
pub type Result<T> = std::result::Result<T, TrellisError>;

/// Errors raised while building or converting a widget tree.
///
/// All of these surface at construction or mutation time, or from
/// `render()` when the tree is inconsistent. Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrellisError {
    /// A value binding was linked to a column holding a different type.
    #[error("column '{column}' holds {actual}, but the binding expects {expected}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },

    /// A typed widget was bound to a column of an incompatible type.
    #[error("{widget_type} widget cannot bind to column '{column}' of type {column_type}")]
    BoundColumnType {
        column: String,
        widget_type: String,
        column_type: String,
    },

    /// A default value is not one of the widget's candidates.
    #[error("value '{value}' is not one of the candidates {candidates:?}")]
    InvalidSelection {
        value: String,
        candidates: Vec<String>,
    },

    /// A child was added to a widget that cannot hold children.
    #[error("{kind} node {node:?} cannot contain children")]
    NotContainer { node: NodeId, kind: HostKind },

    /// A tree mutation would break the hierarchy (cycle or rule violation).
    #[error("invalid hierarchy: {message}")]
    InvalidHierarchy { message: String },

    /// A node id does not resolve to a live node.
    #[error("node {0:?} does not exist")]
    InvalidNode(NodeId),

    /// Builder configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl TrellisError {
    /// Create a binding type mismatch error.
    pub fn type_mismatch(
        column: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a bound column type error.
    pub fn bound_column_type(
        column: impl Into<String>,
        widget_type: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self::BoundColumnType {
            column: column.into(),
            widget_type: widget_type.into(),
            column_type: column_type.into(),
        }
    }

    /// Create an invalid selection error.
    pub fn invalid_selection(value: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::InvalidSelection {
            value: value.into(),
            candidates,
        }
    }

    /// Create a hierarchy error.
    pub fn invalid_hierarchy(message: impl Into<String>) -> Self {
        Self::InvalidHierarchy {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_payload() {
        let err = TrellisError::invalid_selection("Z", vec!["A".into(), "B".into()]);
        assert_eq!(
            err.to_string(),
            r#"value 'Z' is not one of the candidates ["A", "B"]"#
        );

        let err = TrellisError::type_mismatch("Age", "alloc::string::String", "i64");
        assert!(err.to_string().contains("column 'Age' holds i64"));
    }
}
