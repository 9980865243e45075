//! Pages the converter must refuse rather than guess at

use challenge_fetcher::content_saver::markdown_converter::{
    ConversionError, ConversionOptions, convert_challenge_sync,
};

mod common;
use common::challenge_page;

fn convert(description: &str) -> Result<String, ConversionError> {
    convert_challenge_sync(
        &challenge_page("Failing", description),
        "https://projecteuler.net/problem=999",
        &ConversionOptions::default(),
    )
    .map(|result| result.markdown_body)
}

#[test]
fn test_unknown_link_names_the_url() {
    let err = convert(r#"<p>See <a href="https://en.wikipedia.org/wiki/Prime">primes</a>.</p>"#)
        .unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownLinkType {
            url: "https://en.wikipedia.org/wiki/Prime".to_string()
        }
    );
    assert!(err.to_string().contains("https://en.wikipedia.org/wiki/Prime"));
}

#[test]
fn test_colliding_resource_names_are_reported() {
    let err = convert(
        r#"<p><img src="project/images/p101_graph.png"><img src="resources/images/0102_graph.png"></p>"#,
    )
    .unwrap_err();

    match err {
        ConversionError::DuplicateResource {
            filename,
            existing,
            incoming,
        } => {
            assert_eq!(filename, "graph.png");
            assert_eq!(existing, "https://projecteuler.net/project/images/p101_graph.png");
            assert_eq!(incoming, "https://projecteuler.net/resources/images/0102_graph.png");
        }
        other => panic!("expected DuplicateResource, got {other:?}"),
    }
}

#[test]
fn test_resource_without_extension_is_format_error() {
    let err = convert(r#"<p><a href="project/resources/p200_data">data</a></p>"#).unwrap_err();
    assert!(matches!(err, ConversionError::Format { .. }));
}

#[test]
fn test_missing_description_is_structure_error() {
    let html = r#"<html><body><div id="content"><h2>Title only</h2></div></body></html>"#;
    let err = convert_challenge_sync(html, "u", &ConversionOptions::default()).unwrap_err();
    assert!(matches!(err, ConversionError::StructureNotFound { .. }));
}

#[test]
fn test_missing_content_is_structure_error() {
    let err = convert_challenge_sync(
        "<html><body><p>Problem not found</p></body></html>",
        "u",
        &ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ConversionError::StructureNotFound { .. }));
}

#[test]
fn test_unsupported_tooltip_markup() {
    let err = convert(
        r#"<p><span class="tooltip">x<sub>1</sub><span class="tooltiptext">first</span></span></p>"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedElement { ref tag, .. } if tag == "sub"));
}

#[test]
fn test_unknown_link_inside_bold_still_fails() {
    let err = convert(r#"<p>See <b><a href="https://example.com/x">x</a></b>.</p>"#).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownLinkType {
            url: "https://example.com/x".to_string()
        }
    );
}

#[test]
fn test_link_inside_color_span_is_unsupported() {
    let err = convert(r#"<p><span class="red"><a href="problem=2">two</a></span></p>"#).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedElement { ref tag, .. } if tag == "a"));
}

