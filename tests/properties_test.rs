//! Property tests for filename sanitizing, URL classification and manifests

use challenge_fetcher::content_saver::markdown_converter::{
    ConversionError, ConversionOptions, LinkClassification, classify_url, convert_challenge_sync,
    sanitize_resource_filename,
};
use proptest::prelude::*;

mod common;
use common::challenge_page;

const BASE: &str = "https://projecteuler.net/";

proptest! {
    #[test]
    fn prop_resource_urls_keep_name_and_extension(
        prefix in prop_oneof![Just(""), Just("project/")],
        kind in prop_oneof![Just("resources"), Just("images")],
        subpath in "([a-z]{1,5}/){0,2}",
        id in "[a-z0-9]{1,6}",
        name in "[a-z][a-z0-9_]{0,10}",
        ext in "[a-z]{1,4}",
        query in proptest::option::of("[0-9]{1,10}"),
    ) {
        let query = query.map(|q| format!("?{q}")).unwrap_or_default();
        let url = format!("{prefix}{kind}/{subpath}{id}_{name}.{ext}{query}");

        prop_assert_eq!(
            classify_url(&url, BASE).unwrap(),
            LinkClassification::Resource { filename: format!("{name}.{ext}") }
        );
    }

    #[test]
    fn prop_sanitized_names_have_no_path_or_query(raw in "\\PC{0,40}") {
        if let Ok(name) = sanitize_resource_filename(&raw) {
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('?'));
            prop_assert!(name.contains('.'));
        }
    }

    #[test]
    fn prop_names_without_a_dot_are_rejected(raw in "[^.]{0,30}") {
        prop_assert_eq!(
            sanitize_resource_filename(&raw),
            Err(ConversionError::Format { input: raw.clone() })
        );
    }

    #[test]
    fn prop_challenge_pattern_has_priority(
        number in any::<u32>(),
        decoy in prop_oneof![
            Just(""),
            Just("&images/p001_a.png"),
            Just("#resources/0022_names.txt"),
            Just("&about=primes"),
        ],
    ) {
        prop_assert_eq!(
            classify_url(&format!("problem={number}{decoy}"), BASE).unwrap(),
            LinkClassification::ChallengeRef { number }
        );
    }

    #[test]
    fn prop_manifest_has_one_entry_per_distinct_resource(
        stems in proptest::collection::btree_set("[a-z]{1,8}", 1..6),
    ) {
        let description: String = stems
            .iter()
            .enumerate()
            .map(|(i, stem)| format!(r#"<p><img src="project/images/p{i:03}_{stem}.png"></p>"#))
            .collect();
        let html = challenge_page("Resources", &description);

        let first = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();
        let second = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();

        let manifest = first.resources.clone().unwrap();
        prop_assert_eq!(manifest.len(), stems.len());
        for stem in &stems {
            let local_name = format!("{stem}.png");
            prop_assert!(manifest.get(&local_name).is_some());
        }
        prop_assert_eq!(first, second);
    }
}
