//! Foundation types consumed from the surrounding ontology model.
//!
//! - [`Iri`], [`NodeId`] - opaque, non-empty identifiers
//! - [`QualifiedName`] - namespace URI + local name
//! - [`Literal`] - plain (language-tagged) or typed literal values
//! - [`namespace`] - well-known namespace URIs
//!
//! This module has NO dependencies on other owlann modules except the error type.

mod iri;
mod literal;
pub mod namespace;
mod qname;

pub use iri::{Iri, NodeId};
pub use literal::{Literal, PlainLiteral, TypedLiteral};
pub use qname::QualifiedName;
