//! OWL/XML annotation writer.

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::context::{NamespaceContext, PrefixBinding, Prefixes};
use crate::base::Literal;
use crate::error::AnnotationError;
use crate::model::{Annotation, AnnotationProperty, AnnotationValue};

pub(crate) const ANNOTATION: &str = "Annotation";
pub(crate) const ANNOTATION_PROPERTY: &str = "AnnotationProperty";

/// Writes one annotation tree. Consumed by [`write`](Self::write), so the
/// prefix counter never outlives a single document.
pub(crate) struct AnnotationWriter<'a> {
    writer: Writer<Vec<u8>>,
    context: NamespaceContext<'a>,
    xml_declaration: bool,
}

impl<'a> AnnotationWriter<'a> {
    pub fn new(prefixes: &'a Prefixes) -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            context: NamespaceContext::new(prefixes),
            xml_declaration: false,
        }
    }

    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    /// Serialize `annotation`.
    ///
    /// Every `<Annotation>` holds its nested annotation first, then the
    /// property, then the value. The chain is walked without recursion:
    /// start tags go outermost to innermost, then contents and end tags
    /// innermost to outermost. Prefixes are therefore minted innermost first.
    pub fn write(mut self, annotation: &Annotation) -> Result<Vec<u8>, AnnotationError> {
        if self.xml_declaration {
            self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        let chain: Vec<&Annotation> = annotation.chain().collect();

        for level in 0..chain.len() {
            let mut start = BytesStart::new(ANNOTATION);
            if level == 0 {
                for (prefix, namespace) in self.context.root_declarations() {
                    let key = format!("xmlns:{prefix}");
                    start.push_attribute((key.as_str(), namespace));
                }
            }
            self.event(Event::Start(start))?;
        }

        for node in chain.iter().rev() {
            self.write_property(node.property())?;
            self.write_value(node.value())?;
            self.event(Event::End(BytesEnd::new(ANNOTATION)))?;
        }

        tracing::debug!(
            depth = chain.len(),
            minted = self.context.minted_count(),
            "encoded annotation"
        );
        Ok(self.writer.into_inner())
    }

    fn write_property(&mut self, property: &AnnotationProperty) -> Result<(), AnnotationError> {
        let mut start = BytesStart::new(ANNOTATION_PROPERTY);
        match property {
            AnnotationProperty::Iri(iri) => {
                start.push_attribute(("IRI", iri.as_str()));
            }
            AnnotationProperty::AbbreviatedIri(name) => {
                let prefix = self.context.resolve_for_property(name.namespace())?;
                let abbreviated = format!("{prefix}:{}", name.local_name());
                start.push_attribute(("abbreviatedIRI", abbreviated.as_str()));
            }
        }
        self.empty(&start);
        Ok(())
    }

    fn write_value(&mut self, value: &AnnotationValue) -> Result<(), AnnotationError> {
        let element = value.element_name();
        match value {
            AnnotationValue::Iri(iri) => {
                self.text_element(element, BytesStart::new(element), iri.as_str())
            }
            AnnotationValue::AbbreviatedIri(name) => {
                let binding = self.context.resolve_for_value(name.namespace());
                let mut start = BytesStart::new(element);
                if let PrefixBinding::Minted(prefix) = &binding {
                    let key = format!("xmlns:{prefix}");
                    start.push_attribute((key.as_str(), name.namespace()));
                }
                let text = format!("{}:{}", binding.prefix(), name.local_name());
                self.text_element(element, start, &text)
            }
            AnnotationValue::AnonymousIndividual(id) => {
                let mut start = BytesStart::new(element);
                start.push_attribute(("nodeID", id.as_str()));
                self.empty(&start);
                Ok(())
            }
            AnnotationValue::Literal(literal) => {
                let mut start = BytesStart::new(element);
                match literal {
                    Literal::Plain(plain) => {
                        if let Some(language) = plain.language() {
                            start.push_attribute(("xml:lang", language));
                        }
                    }
                    Literal::Typed(typed) => {
                        start.push_attribute(("datatypeIRI", typed.datatype().as_str()));
                    }
                }
                self.text_element(element, start, literal.text())
            }
        }
    }

    /// `<name attrs>text</name>`; text escapes only `&`, `<` and `>`.
    fn text_element(
        &mut self,
        name: &'static str,
        start: BytesStart<'_>,
        text: &str,
    ) -> Result<(), AnnotationError> {
        self.event(Event::Start(start))?;
        self.event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        self.event(Event::End(BytesEnd::new(name)))
    }

    /// `<name attrs />`, with the space before the slash that quick-xml omits.
    fn empty(&mut self, start: &BytesStart<'_>) {
        let out = self.writer.get_mut();
        out.push(b'<');
        out.extend_from_slice(start);
        out.extend_from_slice(b" />");
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), AnnotationError> {
        self.writer
            .write_event(event)
            .map_err(|e| AnnotationError::xml(format!("Write error: {e}")))
    }
}
