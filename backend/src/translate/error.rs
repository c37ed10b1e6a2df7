//! Failure conditions of the translation layer.

use super::kinds::EntityKind;

/// Everything that can abort a translation. There is no partial-result
/// policy: the first error aborts the whole call and no DTO is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    /// A translator was handed a source or destination of a variant it
    /// does not handle. Always a wiring defect, never bad user input.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// No translator registered for the entity kind. A configuration gap
    /// (new entity type without a translator), surfaced as a server-side
    /// fault by callers at the API edge.
    #[error("no translator registered for entity kind '{0}'")]
    NotFound(EntityKind),

    /// The entity graph nested deeper than the facade allows. Real graphs
    /// are shallow trees; hitting this means a reference cycle.
    #[error("entity graph exceeds maximum translation depth {max_depth}")]
    DepthExceeded { max_depth: usize },
}
