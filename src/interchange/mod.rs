//! Annotation interchange.
//!
//! The only format is OWL/XML, the XML serialization of OWL 2 ontologies.
//! [`encode`] and [`decode`] are the two entry points; [`OwlXml`] wraps them
//! behind the [`AnnotationFormat`] trait together with its configuration.
//!
//! ```text
//! Annotation ──encode(prefixes)──▶ AnnotationWriter ──▶ <Annotation>…</Annotation>
//!      ▲                              │
//!      │                        NamespaceContext (known + minted q{N}, one per call)
//!      │
//!      └──────── decode ◀── XmlTree (arena) ◀── quick-xml events
//! ```
//!
//! ## Usage
//!
//! ```
//! use owlann::base::namespace::RDFS;
//! use owlann::interchange::{Prefixes, decode, encode};
//! use owlann::{Annotation, AnnotationProperty, AnnotationValue};
//!
//! let annotation = Annotation::new(
//!     AnnotationProperty::abbreviated(RDFS, "comment")?,
//!     AnnotationValue::iri("http://example.org/seeThis")?,
//! );
//! let prefixes = Prefixes::new().with("rdfs", RDFS)?;
//! let xml = encode(&annotation, &prefixes)?;
//! assert_eq!(decode(&xml)?, annotation);
//! # Ok::<(), owlann::AnnotationError>(())
//! ```

mod context;
mod format;
mod owlxml;
mod reader;
mod writer;

pub use context::{NamespaceContext, PrefixBinding, Prefixes};
pub use format::AnnotationFormat;
pub use owlxml::{OwlXml, decode, encode};

/// Supported file extensions for interchange formats.
pub fn supported_extensions() -> &'static [&'static str] {
    &["owx"]
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn AnnotationFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "owx" => Some(Box::new(OwlXml::new())),
        _ => None,
    }
}

/// Detect format from MIME type.
pub fn detect_format_from_mime(mime: &str) -> Option<Box<dyn AnnotationFormat>> {
    match mime {
        "application/owl+xml" | "application/xml" | "text/xml" => Some(Box::new(OwlXml::new())),
        _ => None,
    }
}
