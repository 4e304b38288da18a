//! Error types for table rendering.

/// Configuration error detected while building or invoking the renderer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A requested column identifier is not registered.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// A column identifier was registered twice.
    #[error("column '{0}' is already registered")]
    DuplicateColumn(String),

    /// The locale table is incomplete.
    #[error("invalid locale table: {0}")]
    InvalidLocaleTable(String),
}
