//! The predicate of an annotation.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{Iri, QualifiedName};
use crate::error::AnnotationError;

/// The predicate of an annotation, e.g. `rdfs:comment`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationProperty {
    /// Identified by its full IRI.
    Iri(Iri),
    /// Identified by namespace + local name; written as `prefix:local`.
    AbbreviatedIri(QualifiedName),
}

impl AnnotationProperty {
    pub fn iri(iri: impl Into<Arc<str>>) -> Result<Self, AnnotationError> {
        Iri::new(iri).map(Self::Iri)
    }

    pub fn abbreviated(
        namespace: impl Into<Arc<str>>,
        local_name: impl Into<SmolStr>,
    ) -> Result<Self, AnnotationError> {
        QualifiedName::new(namespace, local_name).map(Self::AbbreviatedIri)
    }

    /// The full IRI this property denotes, whichever form it is stored in.
    pub fn expanded_iri(&self) -> String {
        match self {
            Self::Iri(iri) => iri.as_str().to_string(),
            Self::AbbreviatedIri(name) => name.expand(),
        }
    }
}

impl From<Iri> for AnnotationProperty {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<QualifiedName> for AnnotationProperty {
    fn from(name: QualifiedName) -> Self {
        Self::AbbreviatedIri(name)
    }
}

impl fmt::Display for AnnotationProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => fmt::Display::fmt(iri, f),
            Self::AbbreviatedIri(name) => fmt::Display::fmt(name, f),
        }
    }
}
