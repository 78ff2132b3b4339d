//! Encoder tests: exact document shape, element order and prefix minting.

use owlann::base::namespace::RDFS;
use owlann::{
    Annotation, AnnotationError, AnnotationFormat, AnnotationProperty, AnnotationValue, Literal,
    OwlXml, Prefixes, encode,
};
use pretty_assertions::assert_eq;

use crate::helpers::annotation_fixtures::*;

#[test]
fn test_encode_iri_value_without_nesting() {
    let xml = encode(&see_this(), &Prefixes::new()).unwrap();
    assert_eq!(
        xml,
        r#"<Annotation><AnnotationProperty IRI="http://www.w3.org/2000/01/rdf-schema#comment" /><IRI>http://example.org/seeThis</IRI></Annotation>"#
    );
}

#[test]
fn test_encode_abbreviated_property_declares_prefix_on_root() {
    let annotation = Annotation::new(abbreviated_comment(), iri_value(SEE_THIS));
    let xml = encode(&annotation, &rdfs_prefixes()).unwrap();
    assert_eq!(
        xml,
        r#"<Annotation xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"><AnnotationProperty abbreviatedIRI="rdfs:comment" /><IRI>http://example.org/seeThis</IRI></Annotation>"#
    );
}

#[test]
fn test_encode_known_prefixes_declared_in_registration_order() {
    let prefixes = Prefixes::new()
        .with("ex", EXAMPLE_NS)
        .unwrap()
        .with("rdfs", RDFS)
        .unwrap();
    let xml = encode(&see_this(), &prefixes).unwrap();
    assert!(
        xml.starts_with(
            r#"<Annotation xmlns:ex="http://example.org/" xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#">"#
        ),
        "{xml}"
    );
}

#[test]
fn test_encode_nested_chain_innermost_first() {
    let chain = comment_chain(&["outer", "middle", "inner"]);
    let xml = encode(&chain, &Prefixes::new()).unwrap();
    let prop = r#"<AnnotationProperty IRI="http://www.w3.org/2000/01/rdf-schema#comment" />"#;
    assert_eq!(
        xml,
        format!(
            "<Annotation><Annotation><Annotation>{prop}<Literal>inner</Literal></Annotation>\
             {prop}<Literal>middle</Literal></Annotation>\
             {prop}<Literal>outer</Literal></Annotation>"
        )
    );

    let inner = xml.find("inner").unwrap();
    let middle = xml.find("middle").unwrap();
    let outer = xml.find("outer").unwrap();
    assert!(inner < middle && middle < outer);
}

#[test]
fn test_encode_mints_prefix_per_use_in_traversal_order() {
    let outer = Annotation::new(comment_property(), example_value("outer"))
        .with_annotation(Annotation::new(comment_property(), example_value("inner")));
    let xml = encode(&outer, &Prefixes::new()).unwrap();
    let prop = r#"<AnnotationProperty IRI="http://www.w3.org/2000/01/rdf-schema#comment" />"#;
    assert_eq!(
        xml,
        format!(
            r#"<Annotation><Annotation>{prop}<AbbreviatedIRI xmlns:q1="http://example.org/">q1:inner</AbbreviatedIRI></Annotation>{prop}<AbbreviatedIRI xmlns:q2="http://example.org/">q2:outer</AbbreviatedIRI></Annotation>"#
        )
    );
}

#[test]
fn test_encode_minting_restarts_for_each_call() {
    let annotation = Annotation::new(comment_property(), example_value("thing"));
    let prefixes = Prefixes::new();
    let first = encode(&annotation, &prefixes).unwrap();
    let second = encode(&annotation, &prefixes).unwrap();
    assert_eq!(first, second);
    assert!(first.contains(r#"xmlns:q1="http://example.org/">q1:thing<"#));
}

#[test]
fn test_encode_known_value_namespace_is_not_redeclared() {
    let annotation = Annotation::new(
        abbreviated_comment(),
        AnnotationValue::abbreviated(RDFS, "label").unwrap(),
    );
    let xml = encode(&annotation, &rdfs_prefixes()).unwrap();
    assert!(xml.contains("<AbbreviatedIRI>rdfs:label</AbbreviatedIRI>"), "{xml}");
    assert_eq!(xml.matches("xmlns:").count(), 1);
}

#[test]
fn test_encode_literals() {
    let tagged = Annotation::new(
        comment_property(),
        AnnotationValue::literal(Literal::lang("a car", "en").unwrap()),
    );
    assert!(
        encode(&tagged, &Prefixes::new())
            .unwrap()
            .contains(r#"<Literal xml:lang="EN">a car</Literal>"#)
    );

    let typed = Annotation::new(comment_property(), integer_value("4"));
    assert!(
        encode(&typed, &Prefixes::new())
            .unwrap()
            .contains(r#"<Literal datatypeIRI="http://www.w3.org/2001/XMLSchema#integer">4</Literal>"#)
    );

    let plain = comment("no language");
    assert!(
        encode(&plain, &Prefixes::new())
            .unwrap()
            .contains("<Literal>no language</Literal>")
    );
}

#[test]
fn test_encode_anonymous_individual() {
    let annotation = Annotation::new(
        comment_property(),
        AnnotationValue::anonymous("AnonIdv").unwrap(),
    );
    let xml = encode(&annotation, &Prefixes::new()).unwrap();
    assert!(xml.ends_with(r#"<AnonymousIndividual nodeID="AnonIdv" /></Annotation>"#), "{xml}");
}

#[test]
fn test_encode_escapes_attribute_values() {
    let annotation = Annotation::new(
        AnnotationProperty::iri("http://example.org/p?a=1&b=\"2\"").unwrap(),
        iri_value(SEE_THIS),
    );
    let xml = encode(&annotation, &Prefixes::new()).unwrap();
    assert!(
        xml.contains(r#"IRI="http://example.org/p?a=1&amp;b=&quot;2&quot;""#),
        "{xml}"
    );
}

#[test]
fn test_encode_abbreviated_property_needs_known_prefix() {
    let annotation = Annotation::new(abbreviated_comment(), iri_value(SEE_THIS));
    let err = encode(&annotation, &Prefixes::new()).unwrap_err();
    assert!(matches!(err, AnnotationError::UnboundNamespace(ns) if ns == RDFS));
}

#[test]
fn test_owl_xml_write_with_declaration() {
    let format = OwlXml::new()
        .with_prefixes(rdfs_prefixes())
        .with_xml_declaration(true);
    let bytes = format.write(&see_this()).unwrap();
    let xml = String::from_utf8(bytes).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><Annotation xmlns:rdfs="#));
    assert_eq!(format.encode(&see_this()).unwrap(), xml);
}
