//! Error types for annotation construction and interchange.

use thiserror::Error;

/// Errors raised while building annotations or moving them through XML.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// A constructor was given a missing or empty payload.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The document does not have the `<Annotation>` shape, or is not XML at all.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// An abbreviated property names a namespace with no registered prefix.
    #[error("No prefix registered for namespace {0}")]
    UnboundNamespace(String),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),
}

impl AnnotationError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// True for decode-time structural failures.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedDocument(_))
    }
}
