//! # owlann-base
//!
//! Annotation value model and OWL/XML annotation codec.
//!
//! Annotations attach metadata (comments, labels, provenance) to ontology
//! elements, and may themselves be annotated to any depth. This crate owns the
//! annotation tree and its XML form; the ontology graph around it is someone
//! else's business.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → OWL/XML encode/decode, prefix tables, format trait
//!   ↓
//! model       → Annotation, AnnotationProperty, AnnotationValue
//!   ↓
//! base        → Primitives (Iri, NodeId, QualifiedName, Literal)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → interchange)
// ============================================================================

/// Foundation types: identifiers, qualified names, literals
pub mod base;

/// Error type shared by construction and interchange
mod error;

/// The annotation tree
pub mod model;

/// OWL/XML interchange
pub mod interchange;

pub use base::{Iri, Literal, NodeId, PlainLiteral, QualifiedName, TypedLiteral};
pub use error::AnnotationError;
pub use interchange::{AnnotationFormat, OwlXml, Prefixes, decode, encode};
pub use model::{Annotation, AnnotationProperty, AnnotationValue};
