//! # Execution Errors
//!
//! Error types for program execution.

use csg_parser::{ParseError, Span};
use thiserror::Error;

/// Errors that can occur while executing a program.
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    /// Parse error from the earlier stage, propagated unchanged.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Call target missing from the registry.
    #[error("unknown operation '{name}' at {span}")]
    UnknownOperation {
        /// The unresolved call target.
        name: String,
        /// Where the call sits in the source.
        span: Span,
    },

    /// Reference to a name with no definition in scope.
    #[error("unresolved reference '{name}' at {span}")]
    UnresolvedReference {
        /// The unresolved name.
        name: String,
        /// Where the reference sits in the source.
        span: Span,
    },

    /// A children binding whose value is not a function reference.
    #[error("children binding must reference a scope function, at {span}")]
    InvalidChildrenBinding {
        /// Where the binding sits in the source.
        span: Span,
    },

    /// Failure reported by an operation itself.
    #[error("operation '{name}' failed: {message}")]
    OperationFailed {
        /// The operation that failed.
        name: String,
        /// Its failure message.
        message: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::UnknownOperation {
            name: "cubee".to_string(),
            span: Span::zero(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown operation 'cubee'"));
        assert!(msg.contains("line 1"));
    }
}
