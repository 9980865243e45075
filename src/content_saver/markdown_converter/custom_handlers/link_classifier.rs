//! Classification of link and image URLs found in challenge descriptions.
//!
//! Patterns are tried top to bottom and the first match wins. There is
//! deliberately no fallback shape: a URL that matches nothing is reported
//! as [`ConversionError::UnknownLinkType`] so new link shapes surface
//! immediately instead of degrading the output.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::super::errors::{ConversionError, ConvertResult};
use super::filename_sanitizer::sanitize_resource_filename;

/// `problem=<digits>`, e.g. `problem=18`
static CHALLENGE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^problem=(?P<number>\d+)").expect("CHALLENGE_URL_RE: hardcoded regex is valid")
});

/// `[project/](resources|images)/[<subpath>/]<filename>`
///
/// The subpath may not contain `?` so a slash inside a query string is never
/// taken for a directory separator.
static RESOURCE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:project/)?(?:resources|images)/(?:[^?]+/)?(?P<filename>[^/?]+(?:\?.*)?)$")
        .expect("RESOURCE_URL_RE: hardcoded regex is valid")
});

/// `about=<word>`, e.g. `about=prime_numbers`
static ABOUT_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^about=(?P<topic>\w+)").expect("ABOUT_URL_RE: hardcoded regex is valid")
});

/// What a link or image URL points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkClassification {
    /// Another challenge page
    ChallengeRef { number: u32 },
    /// A downloadable image or data file, with its sanitized local filename
    Resource { filename: String },
    /// One of the site's informational "about" pages
    AboutPage,
    /// Nothing matched
    Unknown { raw_url: String },
}

type Classifier = fn(&Captures<'_>, &str) -> ConvertResult<LinkClassification>;

/// Ordered (pattern, constructor) pairs. Order is the priority.
static CLASSIFIERS: LazyLock<[(&'static LazyLock<Regex>, Classifier); 3]> = LazyLock::new(|| {
    [
        (&CHALLENGE_URL_RE, challenge_ref as Classifier),
        (&RESOURCE_URL_RE, resource_ref as Classifier),
        (&ABOUT_URL_RE, about_page as Classifier),
    ]
});

fn challenge_ref(caps: &Captures<'_>, raw: &str) -> ConvertResult<LinkClassification> {
    // Digit runs too long for u32 are not a challenge number we know about
    caps["number"]
        .parse::<u32>()
        .map(|number| LinkClassification::ChallengeRef { number })
        .map_err(|_| ConversionError::UnknownLinkType {
            url: raw.to_string(),
        })
}

fn resource_ref(caps: &Captures<'_>, _raw: &str) -> ConvertResult<LinkClassification> {
    let filename = sanitize_resource_filename(&caps["filename"])?;
    Ok(LinkClassification::Resource { filename })
}

fn about_page(_caps: &Captures<'_>, _raw: &str) -> ConvertResult<LinkClassification> {
    Ok(LinkClassification::AboutPage)
}

/// Reduce a URL to the site-relative form the patterns are written against.
///
/// Links on challenge pages are relative (`problem=3`, `project/images/..`),
/// but an absolute link back to the same site is the same reference.
#[must_use]
pub fn site_relative<'a>(url: &'a str, base_url: &str) -> &'a str {
    let url = url.trim();
    let url = url.strip_prefix(base_url).unwrap_or(url);
    let url = url.strip_prefix("./").unwrap_or(url);
    url.trim_start_matches('/')
}

/// Classify a raw `href`/`src` value.
///
/// Returns [`LinkClassification::Unknown`] when no pattern matches; the
/// caller decides whether that is fatal.
///
/// # Errors
///
/// [`ConversionError::Format`] when a resource URL carries no usable filename.
pub fn classify_url(url: &str, base_url: &str) -> ConvertResult<LinkClassification> {
    let relative = site_relative(url, base_url);

    for (pattern, classify) in CLASSIFIERS.iter() {
        if let Some(caps) = pattern.captures(relative) {
            return classify(&caps, url);
        }
    }

    Ok(LinkClassification::Unknown {
        raw_url: url.to_string(),
    })
}
