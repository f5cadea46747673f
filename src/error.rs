//! Error types for rendering and import.

/// Errors raised while issuing drawing commands.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The target stave has no drawing surface attached.
    #[error("Can't draw stave without canvas context.")]
    NoDrawingSurface,
    /// A system could not be assembled from the given staves.
    #[error("invalid system: {0}")]
    InvalidSystem(String),
}

/// Errors raised while reading MusicXML or JSON configuration.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Unsupported root element: '{0}'. Only 'score-partwise' is supported.")]
    UnsupportedRoot(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
