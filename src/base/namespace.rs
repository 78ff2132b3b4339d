//! Well-known namespace URIs.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDF Schema namespace (`rdfs:comment`, `rdfs:label`, ...).
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL 2 namespace. Also the namespace of the OWL/XML element vocabulary.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// XML Schema datatypes namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// The `xml:` namespace, bound implicitly in every XML document.
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// Prefixes registered by [`Prefixes::standard`](crate::interchange::Prefixes::standard).
pub const STANDARD_PREFIXES: &[(&str, &str)] =
    &[("rdf", RDF), ("rdfs", RDFS), ("owl", OWL), ("xsd", XSD)];

/// Prefixes that can never be bound by a document or a caller.
pub const RESERVED_PREFIXES: &[&str] = &["xml", "xmlns"];

/// Check whether `prefix` is one of the reserved XML prefixes.
pub fn is_reserved_prefix(prefix: &str) -> bool {
    RESERVED_PREFIXES.contains(&prefix)
}
