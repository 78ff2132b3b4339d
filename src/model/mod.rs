//! The annotation value model.
//!
//! ```text
//! Annotation
//! ├── property: AnnotationProperty   (IRI | AbbreviatedIRI)
//! ├── value:    AnnotationValue      (IRI | AbbreviatedIRI | AnonymousIndividual | Literal)
//! └── nested:   Option<Annotation>   (metadata about this annotation)
//! ```
//!
//! Every shape is a Rust enum, so a property or value with two payloads (or
//! none) cannot be built. Constructors validate payloads and return
//! [`AnnotationError::InvalidArgument`](crate::AnnotationError::InvalidArgument).

mod annotation;
mod property;
mod value;

pub use annotation::{Annotation, Chain};
pub use property::AnnotationProperty;
pub use value::AnnotationValue;
