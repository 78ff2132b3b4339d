//! The four shapes an annotation value can take.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{Iri, Literal, NodeId, QualifiedName};
use crate::error::AnnotationError;

/// What an annotation says: exactly one of four shapes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Iri(Iri),
    AbbreviatedIri(QualifiedName),
    AnonymousIndividual(NodeId),
    Literal(Literal),
}

impl AnnotationValue {
    pub fn iri(iri: impl Into<Arc<str>>) -> Result<Self, AnnotationError> {
        Iri::new(iri).map(Self::Iri)
    }

    pub fn abbreviated(
        namespace: impl Into<Arc<str>>,
        local_name: impl Into<SmolStr>,
    ) -> Result<Self, AnnotationError> {
        QualifiedName::new(namespace, local_name).map(Self::AbbreviatedIri)
    }

    pub fn anonymous(node_id: impl Into<Arc<str>>) -> Result<Self, AnnotationError> {
        NodeId::new(node_id).map(Self::AnonymousIndividual)
    }

    pub fn literal(literal: Literal) -> Self {
        Self::Literal(literal)
    }

    /// Name of the XML element carrying this value.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Iri(_) => "IRI",
            Self::AbbreviatedIri(_) => "AbbreviatedIRI",
            Self::AnonymousIndividual(_) => "AnonymousIndividual",
            Self::Literal(_) => "Literal",
        }
    }
}

impl From<Iri> for AnnotationValue {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<QualifiedName> for AnnotationValue {
    fn from(name: QualifiedName) -> Self {
        Self::AbbreviatedIri(name)
    }
}

impl From<NodeId> for AnnotationValue {
    fn from(id: NodeId) -> Self {
        Self::AnonymousIndividual(id)
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => fmt::Display::fmt(iri, f),
            Self::AbbreviatedIri(name) => fmt::Display::fmt(name, f),
            Self::AnonymousIndividual(id) => fmt::Display::fmt(id, f),
            Self::Literal(lit) => fmt::Display::fmt(lit, f),
        }
    }
}
