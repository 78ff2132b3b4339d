//! OWL/XML annotation reader.
//!
//! Parsing happens in two passes. The document is first loaded into a flat
//! arena of elements (no recursion, so nesting depth is bounded only by
//! memory), then the `<Annotation>` chain is interpreted from the innermost
//! element outwards. Text content of value elements is taken verbatim.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smol_str::SmolStr;

use super::writer::{ANNOTATION, ANNOTATION_PROPERTY};
use crate::base::namespace::XML;
use crate::base::{Iri, Literal, NodeId, PlainLiteral, QualifiedName, TypedLiteral};
use crate::error::AnnotationError;
use crate::model::{Annotation, AnnotationProperty, AnnotationValue};

const VALUE_ELEMENTS: &[&str] = &["IRI", "AbbreviatedIRI", "AnonymousIndividual", "Literal"];

/// Decode one `<Annotation>` document.
pub(crate) fn read_annotation(input: &str) -> Result<Annotation, AnnotationError> {
    let tree = XmlTree::parse(input)?;
    let root = tree.node(tree.root);
    if root.name != ANNOTATION {
        return Err(AnnotationError::malformed(format!(
            "expected <{ANNOTATION}> root element, found <{}>",
            root.name
        )));
    }

    let mut levels = Vec::new();
    let mut current = Some(tree.root);
    while let Some(index) = current {
        let parts = tree.annotation_parts(index)?;
        current = parts.nested;
        levels.push(parts);
    }

    let mut built: Option<Annotation> = None;
    while let Some(parts) = levels.pop() {
        let property = tree.read_property(parts.property)?;
        let value = tree.read_value(parts.value)?;
        let mut annotation = Annotation::new(property, value);
        if let Some(inner) = built.take() {
            annotation.annotate(inner);
        }
        built = Some(annotation);
    }

    built.ok_or_else(|| AnnotationError::malformed("no <Annotation> element"))
}

/// Child elements of one `<Annotation>`, as arena indices.
struct AnnotationParts {
    nested: Option<usize>,
    property: usize,
    value: usize,
}

#[derive(Debug, Default)]
struct XmlNode {
    /// Local name; any element prefix is ignored.
    name: String,
    attributes: Vec<(String, String)>,
    /// `xmlns:prefix` declarations made on this element.
    namespaces: Vec<(String, String)>,
    children: Vec<usize>,
    text: String,
    parent: Option<usize>,
}

impl XmlNode {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug)]
struct XmlTree {
    nodes: Vec<XmlNode>,
    root: usize,
}

impl XmlTree {
    fn parse(input: &str) -> Result<Self, AnnotationError> {
        let mut reader = Reader::from_str(input);
        let mut nodes: Vec<XmlNode> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut root: Option<usize> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let index = Self::open_element(&mut nodes, &open, &mut root, &e)?;
                    open.push(index);
                }
                Ok(Event::Empty(e)) => {
                    Self::open_element(&mut nodes, &open, &mut root, &e)?;
                }
                Ok(Event::End(_)) => {
                    open.pop();
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| AnnotationError::malformed(format!("Text error: {e}")))?;
                    Self::append_text(&mut nodes, &open, &text)?;
                }
                Ok(Event::CData(e)) => {
                    let bytes = e.into_inner();
                    let text = std::str::from_utf8(&bytes)
                        .map_err(|e| AnnotationError::malformed(format!("CDATA error: {e}")))?;
                    Self::append_text(&mut nodes, &open, text)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(AnnotationError::malformed(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                // Declarations, comments, processing instructions, doctypes
                Ok(_) => {}
            }
        }

        if let Some(&unclosed) = open.last() {
            return Err(AnnotationError::malformed(format!(
                "unclosed element <{}>",
                nodes[unclosed].name
            )));
        }
        let root = root.ok_or_else(|| AnnotationError::malformed("document has no root element"))?;
        Ok(Self { nodes, root })
    }

    fn open_element(
        nodes: &mut Vec<XmlNode>,
        open: &[usize],
        root: &mut Option<usize>,
        e: &BytesStart<'_>,
    ) -> Result<usize, AnnotationError> {
        let parent = open.last().copied();
        if parent.is_none() && root.is_some() {
            return Err(AnnotationError::malformed("multiple root elements"));
        }

        let local_name = e.local_name();
        let name = std::str::from_utf8(local_name.as_ref())
            .map_err(|e| AnnotationError::malformed(format!("Invalid tag name: {e}")))?
            .to_string();

        let mut node = XmlNode {
            name,
            parent,
            ..XmlNode::default()
        };
        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|e| AnnotationError::malformed(format!("Attribute error: {e}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| AnnotationError::malformed(format!("Attribute key error: {e}")))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| AnnotationError::malformed(format!("Attribute value error: {e}")))?
                .into_owned();

            if let Some(prefix) = key.strip_prefix("xmlns:") {
                node.namespaces.push((prefix.to_string(), value));
            } else if key != "xmlns" {
                node.attributes.push((key, value));
            }
        }

        let index = nodes.len();
        nodes.push(node);
        match parent {
            Some(parent) => nodes[parent].children.push(index),
            None => *root = Some(index),
        }
        Ok(index)
    }

    fn append_text(nodes: &mut [XmlNode], open: &[usize], text: &str) -> Result<(), AnnotationError> {
        match open.last() {
            Some(&index) => nodes[index].text.push_str(text),
            None if text.trim().is_empty() => {}
            None => return Err(AnnotationError::malformed("text outside the root element")),
        }
        Ok(())
    }

    fn node(&self, index: usize) -> &XmlNode {
        &self.nodes[index]
    }

    /// Classify the children of an `<Annotation>` element.
    fn annotation_parts(&self, index: usize) -> Result<AnnotationParts, AnnotationError> {
        let node = self.node(index);
        if !node.text.trim().is_empty() {
            return Err(AnnotationError::malformed(format!(
                "unexpected text {:?} in <{ANNOTATION}>",
                node.text.trim()
            )));
        }

        let mut nested = None;
        let mut property = None;
        let mut values = Vec::new();
        for &child in &node.children {
            let name = self.node(child).name.as_str();
            match name {
                ANNOTATION if nested.is_some() => {
                    return Err(AnnotationError::malformed(format!(
                        "more than one nested <{ANNOTATION}>"
                    )));
                }
                ANNOTATION => nested = Some(child),
                ANNOTATION_PROPERTY if property.is_some() => {
                    return Err(AnnotationError::malformed(format!(
                        "more than one <{ANNOTATION_PROPERTY}>"
                    )));
                }
                ANNOTATION_PROPERTY => property = Some(child),
                _ if VALUE_ELEMENTS.contains(&name) => values.push(child),
                _ => {
                    return Err(AnnotationError::malformed(format!(
                        "unexpected element <{name}> in <{ANNOTATION}>"
                    )));
                }
            }
        }

        let property = property.ok_or_else(|| {
            AnnotationError::malformed(format!("missing <{ANNOTATION_PROPERTY}>"))
        })?;
        let value = match values.as_slice() {
            [value] => *value,
            _ => {
                return Err(AnnotationError::malformed(format!(
                    "expected exactly one annotation value, found {}",
                    values.len()
                )));
            }
        };
        Ok(AnnotationParts {
            nested,
            property,
            value,
        })
    }

    fn read_property(&self, index: usize) -> Result<AnnotationProperty, AnnotationError> {
        let node = self.leaf(index)?;
        match (node.attribute("IRI"), node.attribute("abbreviatedIRI")) {
            (Some(iri), None) => Iri::new(iri)
                .map(AnnotationProperty::Iri)
                .map_err(|e| in_element(ANNOTATION_PROPERTY, e)),
            (None, Some(abbreviated)) => self
                .resolve_abbreviated(index, abbreviated)
                .map(AnnotationProperty::AbbreviatedIri),
            (Some(_), Some(_)) => Err(AnnotationError::malformed(format!(
                "<{ANNOTATION_PROPERTY}> has both IRI and abbreviatedIRI"
            ))),
            (None, None) => Err(AnnotationError::malformed(format!(
                "<{ANNOTATION_PROPERTY}> has neither IRI nor abbreviatedIRI"
            ))),
        }
    }

    fn read_value(&self, index: usize) -> Result<AnnotationValue, AnnotationError> {
        let node = self.leaf(index)?;
        match node.name.as_str() {
            "IRI" => Iri::new(node.text.as_str())
                .map(AnnotationValue::Iri)
                .map_err(|e| in_element("IRI", e)),
            "AbbreviatedIRI" => self
                .resolve_abbreviated(index, &node.text)
                .map(AnnotationValue::AbbreviatedIri),
            "AnonymousIndividual" => {
                let id = node.attribute("nodeID").ok_or_else(|| {
                    AnnotationError::malformed("<AnonymousIndividual> without nodeID")
                })?;
                NodeId::new(id)
                    .map(AnnotationValue::AnonymousIndividual)
                    .map_err(|e| in_element("AnonymousIndividual", e))
            }
            "Literal" => Self::read_literal(node).map(AnnotationValue::Literal),
            other => Err(AnnotationError::malformed(format!(
                "<{other}> is not an annotation value"
            ))),
        }
    }

    /// The language tag is kept exactly as written.
    fn read_literal(node: &XmlNode) -> Result<Literal, AnnotationError> {
        match (node.attribute("xml:lang"), node.attribute("datatypeIRI")) {
            (Some(_), Some(_)) => Err(AnnotationError::malformed(
                "<Literal> has both xml:lang and datatypeIRI",
            )),
            (None, Some(datatype)) => TypedLiteral::new(node.text.as_str(), datatype)
                .map(Literal::Typed)
                .map_err(|e| in_element("Literal", e)),
            (language, None) => {
                let language = language.filter(|l| !l.is_empty()).map(SmolStr::new);
                Ok(Literal::Plain(PlainLiteral::verbatim(
                    node.text.as_str(),
                    language,
                )))
            }
        }
    }

    /// Property and value elements carry no child elements.
    fn leaf(&self, index: usize) -> Result<&XmlNode, AnnotationError> {
        let node = self.node(index);
        if let Some(&child) = node.children.first() {
            return Err(AnnotationError::malformed(format!(
                "unexpected element <{}> in <{}>",
                self.node(child).name,
                node.name
            )));
        }
        Ok(node)
    }

    /// Resolve `prefix:local` against the declarations in scope at `index`.
    fn resolve_abbreviated(&self, index: usize, text: &str) -> Result<QualifiedName, AnnotationError> {
        let (prefix, local) = text
            .split_once(':')
            .filter(|(prefix, local)| !prefix.is_empty() && !local.is_empty())
            .ok_or_else(|| {
                AnnotationError::malformed(format!("`{text}` is not of the form prefix:local"))
            })?;
        let namespace = self.lookup_namespace(index, prefix).ok_or_else(|| {
            AnnotationError::malformed(format!("undeclared namespace prefix `{prefix}` in `{text}`"))
        })?;
        tracing::trace!(prefix, namespace, local, "resolved abbreviated name");
        QualifiedName::new(namespace, local)
            .map_err(|e| in_element(self.node(index).name.as_str(), e))
    }

    /// Innermost declaration wins.
    fn lookup_namespace(&self, index: usize, prefix: &str) -> Option<&str> {
        if prefix == "xml" {
            return Some(XML);
        }
        let mut current = Some(index);
        while let Some(i) = current {
            let node = self.node(i);
            if let Some((_, namespace)) = node.namespaces.iter().find(|(p, _)| p == prefix) {
                return Some(namespace);
            }
            current = node.parent;
        }
        None
    }
}

/// Construction failures inside a document are document errors.
fn in_element(element: &str, error: AnnotationError) -> AnnotationError {
    match error {
        AnnotationError::InvalidArgument(message) => {
            AnnotationError::malformed(format!("<{element}>: {message}"))
        }
        other => other,
    }
}
