//! Link and image rewriting for challenge descriptions.
//!
//! Every `<a>` and `<img>` is classified and replaced with Markdown text:
//!
//! - challenge reference → absolute link to the challenge page
//! - resource → local `./<filename>` link (`!`-prefixed for images), with the
//!   remote URL recorded in the [`ResourceManifest`]
//! - about page → absolute link on the site
//!
//! An unknown link shape fails the whole conversion.

use kuchiki::NodeRef;

use super::super::errors::{ConversionError, ConvertResult};
use super::super::types::ResourceManifest;
use super::link_classifier::{LinkClassification, classify_url, site_relative};
use super::{collect_elements, element_name, get_attribute, replace_with_text};
use crate::utils::{challenge_url, with_trailing_slash};

/// Rewrite every link and image below `description`.
///
/// Returns the rewritten subtree together with the resources it references.
/// `base_url` gets a trailing slash if it lacks one.
///
/// # Errors
///
/// - [`ConversionError::UnknownLinkType`] for a URL no pattern recognises
/// - [`ConversionError::DuplicateResource`] when two remote files share a local name
/// - [`ConversionError::Format`] when a resource URL has no usable filename
/// - [`ConversionError::UnsupportedElement`] for a link without a URL
pub fn rewrite_links(
    description: NodeRef,
    base_url: &str,
) -> ConvertResult<(NodeRef, ResourceManifest)> {
    let base_url = with_trailing_slash(base_url);
    let targets = collect_elements(&description, |tag, _| matches!(tag, "a" | "img"));
    let mut resources = Vec::new();

    // Innermost first, so an <img> inside an <a> is already text when the
    // enclosing link reads its contents
    for node in targets.into_iter().rev() {
        let markdown = link_markdown(&node, &base_url, &mut resources)?;
        replace_with_text(&node, &markdown);
    }

    // Document order, so a collision names the earlier URL as the existing one
    let mut manifest = ResourceManifest::new();
    for (filename, remote_url) in resources.into_iter().rev() {
        manifest.insert(filename, remote_url)?;
    }

    Ok((description, manifest))
}

/// Markdown for one link; resources are pushed as `(local filename, remote URL)`
fn link_markdown(
    node: &NodeRef,
    base_url: &str,
    resources: &mut Vec<(String, String)>,
) -> ConvertResult<String> {
    let tag = element_name(node).unwrap_or_default();
    let is_image = tag == "img";
    let url_attribute = if is_image { "src" } else { "href" };

    let url = get_attribute(node, url_attribute).ok_or_else(|| {
        ConversionError::unsupported(tag.as_str(), "link rewriting without a URL attribute")
    })?;

    let text = if is_image {
        get_attribute(node, "alt").unwrap_or_default()
    } else {
        node.text_contents()
    };

    match classify_url(&url, base_url)? {
        LinkClassification::ChallengeRef { number } => {
            Ok(markdown_link(is_image, &text, &challenge_url(base_url, number)))
        }
        LinkClassification::Resource { filename } => {
            let remote_url = format!("{base_url}{}", site_relative(&url, base_url));
            tracing::debug!(filename = %filename, url = %remote_url, "Found challenge resource");
            let markdown = markdown_link(is_image, &filename, &format!("./{filename}"));
            resources.push((filename, remote_url));
            Ok(markdown)
        }
        LinkClassification::AboutPage => {
            let absolute = format!("{base_url}{}", site_relative(&url, base_url));
            Ok(markdown_link(is_image, &text, &absolute))
        }
        LinkClassification::Unknown { raw_url } => {
            Err(ConversionError::UnknownLinkType { url: raw_url })
        }
    }
}

fn markdown_link(is_image: bool, text: &str, target: &str) -> String {
    let bang = if is_image { "!" } else { "" };
    format!("{bang}[{text}]({target})")
}

#[cfg(test)]
mod tests {
    use super::super::test_util::description;
    use super::*;

    const BASE: &str = "https://projecteuler.net/";

    fn rewrite(inner_html: &str) -> ConvertResult<(String, ResourceManifest)> {
        rewrite_links(description(inner_html), BASE)
            .map(|(node, manifest)| (node.text_contents(), manifest))
    }

    #[test]
    fn test_challenge_link_keeps_text() {
        let (text, manifest) = rewrite(r#"<p>see <a href="problem=18">Problem 18</a>.</p>"#).unwrap();
        assert_eq!(text, "see [Problem 18](https://projecteuler.net/problem=18).");
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_resources_become_local_links() {
        let (text, manifest) = rewrite(concat!(
            r#"<p><img src="project/images/p096_1.png" alt="grid"></p>"#,
            r#"<p><a href="project/resources/p096_sudoku.txt">this file</a></p>"#,
        ))
        .unwrap();

        assert_eq!(text, "![1.png](./1.png)[sudoku.txt](./sudoku.txt)");
        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest.get("1.png"),
            Some("https://projecteuler.net/project/images/p096_1.png")
        );
        assert_eq!(
            manifest.get("sudoku.txt"),
            Some("https://projecteuler.net/project/resources/p096_sudoku.txt")
        );
    }

    #[test]
    fn test_about_link_made_absolute() {
        let (text, _) = rewrite(r#"<a href="about=primes">primes</a>"#).unwrap();
        assert_eq!(text, "[primes](https://projecteuler.net/about=primes)");
    }

    #[test]
    fn test_unknown_link_is_fatal() {
        let err = rewrite(r#"<a href="https://example.com/x">x</a>"#).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownLinkType {
                url: "https://example.com/x".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_filename_is_fatal() {
        let err = rewrite(concat!(
            r#"<img src="project/images/p096_1.png">"#,
            r#"<img src="project/images/p097_1.png">"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConversionError::DuplicateResource { ref filename, .. } if filename == "1.png"));
    }

    #[test]
    fn test_same_resource_twice_is_one_entry() {
        let (text, manifest) = rewrite(concat!(
            r#"<a href="resources/documents/0022_names.txt">a</a> "#,
            r#"<a href="resources/documents/0022_names.txt">b</a>"#,
        ))
        .unwrap();
        assert_eq!(text, "[names.txt](./names.txt) [names.txt](./names.txt)");
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_link_without_href_is_unsupported() {
        let err = rewrite("<a name=\"anchor\">x</a>").unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedElement { ref tag, .. } if tag == "a"));
    }

    #[test]
    fn test_duplicate_reports_first_url_as_existing() {
        let err = rewrite(concat!(
            r#"<img src="project/images/p101_graph.png">"#,
            r#"<img src="resources/images/0102_graph.png">"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            ConversionError::DuplicateResource {
                filename: "graph.png".to_string(),
                existing: "https://projecteuler.net/project/images/p101_graph.png".to_string(),
                incoming: "https://projecteuler.net/resources/images/0102_graph.png".to_string(),
            }
        );
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let (text, manifest) = rewrite_links(
            description(r#"<a href="problem=2">two</a> <img src="project/images/p096_1.png">"#),
            "http://127.0.0.1:8080",
        )
        .unwrap();
        assert_eq!(
            text.text_contents(),
            "[two](http://127.0.0.1:8080/problem=2) ![1.png](./1.png)"
        );
        assert_eq!(
            manifest.get("1.png"),
            Some("http://127.0.0.1:8080/project/images/p096_1.png")
        );
    }
}
