//! Decoder tests: accepted shapes and every rejected one.

use owlann::base::namespace::RDFS;
use owlann::{
    AnnotationFormat, AnnotationProperty, AnnotationValue, Literal, OwlXml, QualifiedName, decode,
};
use rstest::rstest;

use crate::helpers::annotation_fixtures::*;

const PROP: &str = r#"<AnnotationProperty IRI="http://www.w3.org/2000/01/rdf-schema#comment" />"#;

#[test]
fn test_decode_anonymous_individual() {
    let annotation = decode(
        r#"<Annotation><AnnotationProperty IRI="http://www.w3.org/2000/01/rdf-schema#comment" /><AnonymousIndividual nodeID="AnonIdv" /></Annotation>"#,
    )
    .unwrap();
    assert_eq!(annotation.property(), &comment_property());
    match annotation.value() {
        AnnotationValue::AnonymousIndividual(id) => assert_eq!(id.as_str(), "AnonIdv"),
        other => panic!("expected anonymous individual, got {other}"),
    }
    assert!(annotation.nested().is_none());
}

#[test]
fn test_decode_abbreviated_property_against_root_declaration() {
    let annotation = decode(
        r#"<Annotation xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"><AnnotationProperty abbreviatedIRI="rdfs:comment" /><IRI>http://example.org/seeThis</IRI></Annotation>"#,
    )
    .unwrap();
    assert_eq!(annotation.property(), &abbreviated_comment());
    assert_eq!(annotation.value(), &iri_value(SEE_THIS));
}

#[test]
fn test_decode_locally_declared_value_prefix() {
    let annotation = decode(&format!(
        r#"<Annotation>{PROP}<AbbreviatedIRI xmlns:q1="http://example.org/">q1:thing</AbbreviatedIRI></Annotation>"#
    ))
    .unwrap();
    assert_eq!(
        annotation.value(),
        &AnnotationValue::AbbreviatedIri(QualifiedName::new(EXAMPLE_NS, "thing").unwrap())
    );
}

#[test]
fn test_decode_preserves_language_casing() {
    let annotation = decode(&format!(
        r#"<Annotation>{PROP}<Literal xml:lang="en">a car</Literal></Annotation>"#
    ))
    .unwrap();
    let AnnotationValue::Literal(literal) = annotation.value() else {
        panic!("expected a literal");
    };
    assert_eq!(literal.language(), Some("en"));
    assert_eq!(literal.text(), "a car");
    // The constructor path normalizes, the decode path does not.
    assert_ne!(literal, &Literal::lang("a car", "en").unwrap());
}

#[test]
fn test_decode_empty_language_is_untagged() {
    let annotation = decode(&format!(
        r#"<Annotation>{PROP}<Literal xml:lang="">x</Literal></Annotation>"#
    ))
    .unwrap();
    assert_eq!(annotation.value(), &text_value("x"));
}

#[test]
fn test_decode_typed_literal() {
    let annotation = decode(&format!(
        r#"<Annotation>{PROP}<Literal datatypeIRI="http://www.w3.org/2001/XMLSchema#integer">4</Literal></Annotation>"#
    ))
    .unwrap();
    assert_eq!(annotation.value(), &integer_value("4"));
}

#[test]
fn test_decode_children_in_any_order() {
    let annotation = decode(&format!(
        "<Annotation><Literal>outer</Literal>{PROP}<Annotation><Literal>inner</Literal>{PROP}</Annotation></Annotation>"
    ))
    .unwrap();
    assert_eq!(annotation, comment_chain(&["outer", "inner"]));
}

#[test]
fn test_decode_three_deep_chain() {
    let annotation = decode(&format!(
        "<Annotation><Annotation><Annotation>{PROP}<Literal>c</Literal></Annotation>{PROP}<Literal>b</Literal></Annotation>{PROP}<Literal>a</Literal></Annotation>"
    ))
    .unwrap();
    assert_eq!(annotation.depth(), 3);
    assert_eq!(annotation, comment_chain(&["a", "b", "c"]));
}

#[test]
fn test_decode_tolerates_layout_and_prolog() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- provenance of a comment -->
<Annotation xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#">
    <AnnotationProperty abbreviatedIRI="rdfs:comment" />
    <Literal>  padded text  </Literal>
</Annotation>
"#;
    let annotation = decode(xml).unwrap();
    assert_eq!(annotation.value(), &text_value("  padded text  "));
}

#[test]
fn test_decode_cdata_and_entities() {
    let annotation = decode(&format!(
        "<Annotation>{PROP}<Literal><![CDATA[a < b]]> &amp; c</Literal></Annotation>"
    ))
    .unwrap();
    assert_eq!(annotation.value(), &text_value("a < b & c"));
}

#[test]
fn test_decode_keeps_identifier_text_verbatim() {
    let annotation = decode(&format!(
        "<Annotation>{PROP}<IRI> http://example.org/seeThis\n</IRI></Annotation>"
    ))
    .unwrap();
    assert_eq!(annotation.value(), &iri_value(" http://example.org/seeThis\n"));
    assert_ne!(annotation, see_this());
}

#[test]
fn test_decode_matches_element_local_names() {
    let annotation = decode(
        r#"<owl:Annotation xmlns:owl="http://www.w3.org/2002/07/owl#"><owl:AnnotationProperty IRI="http://www.w3.org/2000/01/rdf-schema#comment" /><owl:IRI>http://example.org/seeThis</owl:IRI></owl:Annotation>"#,
    )
    .unwrap();
    assert_eq!(annotation, see_this());
}

#[test]
fn test_owl_xml_read() {
    let bytes = format!("<Annotation>{PROP}<IRI>{SEE_THIS}</IRI></Annotation>");
    let annotation = OwlXml::new().read(bytes.as_bytes()).unwrap();
    assert_eq!(annotation, see_this());
    assert_eq!(
        annotation.property(),
        &AnnotationProperty::iri(format!("{RDFS}comment")).unwrap()
    );
}

#[rstest]
#[case::missing_property("<Annotation><IRI>http://example.org/x</IRI></Annotation>")]
#[case::property_without_identifier(
    "<Annotation><AnnotationProperty /><IRI>http://example.org/x</IRI></Annotation>"
)]
#[case::property_with_both_identifiers(
    r#"<Annotation xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"><AnnotationProperty IRI="http://example.org/p" abbreviatedIRI="rdfs:comment" /><IRI>http://example.org/x</IRI></Annotation>"#
)]
#[case::duplicate_property(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><AnnotationProperty IRI="http://example.org/q" /><IRI>http://example.org/x</IRI></Annotation>"#
)]
#[case::property_with_undeclared_prefix(
    r#"<Annotation><AnnotationProperty abbreviatedIRI="rdfs:comment" /><IRI>http://example.org/x</IRI></Annotation>"#
)]
#[case::no_value(r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /></Annotation>"#)]
#[case::two_values(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><IRI>http://example.org/x</IRI><Literal>x</Literal></Annotation>"#
)]
#[case::literal_with_language_and_datatype(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal xml:lang="en" datatypeIRI="http://www.w3.org/2001/XMLSchema#string">x</Literal></Annotation>"#
)]
#[case::literal_with_empty_datatype(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal datatypeIRI="">x</Literal></Annotation>"#
)]
#[case::abbreviated_value_undeclared_prefix(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><AbbreviatedIRI>ex:thing</AbbreviatedIRI></Annotation>"#
)]
#[case::abbreviated_value_without_colon(
    r#"<Annotation xmlns:ex="http://example.org/"><AnnotationProperty IRI="http://example.org/p" /><AbbreviatedIRI>thing</AbbreviatedIRI></Annotation>"#
)]
#[case::prefix_declared_on_sibling(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" xmlns:ex="http://example.org/" /><AbbreviatedIRI>ex:thing</AbbreviatedIRI></Annotation>"#
)]
#[case::empty_iri(r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><IRI></IRI></Annotation>"#)]
#[case::empty_property_iri(r#"<Annotation><AnnotationProperty IRI="" /><IRI>http://example.org/x</IRI></Annotation>"#)]
#[case::anonymous_without_node_id(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><AnonymousIndividual /></Annotation>"#
)]
#[case::two_nested_annotations(
    r#"<Annotation><Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal>a</Literal></Annotation><Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal>b</Literal></Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal>c</Literal></Annotation>"#
)]
#[case::malformed_nested_annotation(
    r#"<Annotation><Annotation><Literal>a</Literal></Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal>c</Literal></Annotation>"#
)]
#[case::unexpected_element(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal>x</Literal><Comment /></Annotation>"#
)]
#[case::child_inside_value(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><IRI><Literal>x</Literal></IRI></Annotation>"#
)]
#[case::stray_text(
    r#"<Annotation>oops<AnnotationProperty IRI="http://example.org/p" /><Literal>x</Literal></Annotation>"#
)]
#[case::wrong_root(r#"<Literal>x</Literal>"#)]
#[case::mismatched_end_tag(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal>x</IRI></Annotation>"#
)]
#[case::unclosed_root(r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal>x</Literal>"#)]
#[case::trailing_root(
    r#"<Annotation><AnnotationProperty IRI="http://example.org/p" /><Literal>x</Literal></Annotation><Annotation/>"#
)]
#[case::empty_document("")]
fn test_decode_rejects_malformed(#[case] xml: &str) {
    let err = decode(xml).expect_err("document should be rejected");
    assert!(err.is_malformed(), "expected MalformedDocument, got {err:?}");
}
