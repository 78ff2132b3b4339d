//! Opaque identifiers consumed from the ontology model.

use std::fmt;
use std::sync::Arc;

use crate::error::AnnotationError;

/// A full resource identifier.
///
/// Only non-emptiness is checked; IRI syntax is the caller's business.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Create an IRI, rejecting the empty string.
    pub fn new(iri: impl Into<Arc<str>>) -> Result<Self, AnnotationError> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(AnnotationError::invalid_argument("IRI must not be empty"));
        }
        Ok(Self(iri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A blank-node identifier, only meaningful inside one document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Create a node identifier, rejecting the empty string.
    pub fn new(id: impl Into<Arc<str>>) -> Result<Self, AnnotationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(AnnotationError::invalid_argument(
                "anonymous individual node ID must not be empty",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
