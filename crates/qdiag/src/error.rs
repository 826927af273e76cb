//! Error types for the diagram crate.

use thiserror::Error;

/// Errors that can occur while building or resolving diagram info.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DiagramError {
    /// A single string was supplied where a sequence of wire symbols was expected.
    #[error(
        "Expected a sequence of wire symbols but got the bare string {symbols:?}; \
         wrap it in a one-element sequence instead"
    )]
    BareWireSymbols {
        /// The offending string.
        symbols: String,
    },

    /// The value implements no diagram-info capability at all.
    #[error("Object of type '{type_name}' has no diagram info capability")]
    CapabilityAbsent {
        /// Rust type name of the queried value.
        type_name: &'static str,
    },

    /// The value has a diagram-info capability, but it declined to answer.
    #[error(
        "Object of type '{type_name}' does have a diagram info capability, \
         but it reported that it is not applicable"
    )]
    CapabilityDeclined {
        /// Rust type name of the queried value.
        type_name: &'static str,
    },
}

impl DiagramError {
    /// Whether this error came from dispatch rather than validation.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            DiagramError::CapabilityAbsent { .. } | DiagramError::CapabilityDeclined { .. }
        )
    }
}

/// Result type for diagram operations.
pub type DiagramResult<T> = Result<T, DiagramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_messages_are_distinct() {
        let absent = DiagramError::CapabilityAbsent { type_name: "Foo" };
        let declined = DiagramError::CapabilityDeclined { type_name: "Foo" };

        assert_ne!(absent.to_string(), declined.to_string());
        assert!(absent.to_string().contains("has no diagram info"));
        assert!(declined.to_string().contains("not applicable"));
        assert!(absent.is_resolution_error());
        assert!(declined.is_resolution_error());
    }

    #[test]
    fn test_bare_wire_symbols_message() {
        let err = DiagramError::BareWireSymbols {
            symbols: "X".to_string(),
        };
        assert!(err.to_string().contains("\"X\""));
        assert!(!err.is_resolution_error());
    }
}
