//! OWL/XML annotation format.
//!
//! ```xml
//! <Annotation xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#">
//!   <Annotation>
//!     <AnnotationProperty IRI="http://purl.org/dc/elements/1.1/source" />
//!     <AbbreviatedIRI xmlns:q1="http://example.org/">q1:catalogue</AbbreviatedIRI>
//!   </Annotation>
//!   <AnnotationProperty abbreviatedIRI="rdfs:comment" />
//!   <Literal xml:lang="EN">A vehicle with four wheels</Literal>
//! </Annotation>
//! ```
//!
//! (Indented for readability; the writer emits no whitespace between elements.)
//!
//! Known prefixes are declared on the root element. Namespaces of abbreviated
//! values that are not known get a minted `q{N}` prefix declared on the
//! `<AbbreviatedIRI>` element itself. Abbreviated properties must use a known
//! prefix.

use super::context::Prefixes;
use super::reader::read_annotation;
use super::writer::AnnotationWriter;
use super::AnnotationFormat;
use crate::error::AnnotationError;
use crate::model::Annotation;

/// Encode `annotation` as OWL/XML text using the known `prefixes`.
pub fn encode(annotation: &Annotation, prefixes: &Prefixes) -> Result<String, AnnotationError> {
    let bytes = AnnotationWriter::new(prefixes).write(annotation)?;
    String::from_utf8(bytes).map_err(|e| AnnotationError::xml(format!("Invalid UTF-8 output: {e}")))
}

/// Decode an OWL/XML `<Annotation>` document.
///
/// Language tags are kept exactly as written in the document.
pub fn decode(xml: &str) -> Result<Annotation, AnnotationError> {
    read_annotation(xml)
        .inspect(|annotation| tracing::debug!(depth = annotation.depth(), "decoded annotation"))
        .inspect_err(|e| tracing::debug!(error = %e, "rejected annotation document"))
}

/// OWL/XML format handler.
#[derive(Debug, Clone, Default)]
pub struct OwlXml {
    prefixes: Prefixes,
    xml_declaration: bool,
}

impl OwlXml {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a known prefix.
    pub fn with_prefix(
        mut self,
        prefix: &str,
        namespace: &str,
    ) -> Result<Self, AnnotationError> {
        self.prefixes.insert(prefix, namespace)?;
        Ok(self)
    }

    /// Replace the known prefix table.
    pub fn with_prefixes(mut self, prefixes: Prefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root element.
    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// Encode to a `String`.
    pub fn encode(&self, annotation: &Annotation) -> Result<String, AnnotationError> {
        let bytes = self.write(annotation)?;
        String::from_utf8(bytes)
            .map_err(|e| AnnotationError::xml(format!("Invalid UTF-8 output: {e}")))
    }
}

impl AnnotationFormat for OwlXml {
    fn name(&self) -> &'static str {
        "OWL/XML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["owx"]
    }

    fn mime_type(&self) -> &'static str {
        "application/owl+xml"
    }

    fn read(&self, input: &[u8]) -> Result<Annotation, AnnotationError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| AnnotationError::malformed(format!("Invalid UTF-8: {e}")))?;
        decode(content)
    }

    fn write(&self, annotation: &Annotation) -> Result<Vec<u8>, AnnotationError> {
        AnnotationWriter::new(&self.prefixes)
            .with_xml_declaration(self.xml_declaration)
            .write(annotation)
    }

    fn validate(&self, input: &[u8]) -> Result<(), AnnotationError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| AnnotationError::malformed(format!("Invalid UTF-8: {e}")))?;
        if !content.contains("<Annotation") && !content.contains(":Annotation") {
            return Err(AnnotationError::malformed("Missing <Annotation> element"));
        }
        Ok(())
    }
}
