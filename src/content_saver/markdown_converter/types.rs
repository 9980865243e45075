//! Result records produced by the challenge converter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::{ConversionError, ConvertResult};

/// Local filename → remote URL for every resource a challenge body links to.
///
/// Keys are unique within one conversion. Backed by a `BTreeMap` so two
/// conversions of the same page serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceManifest {
    entries: BTreeMap<String, String>,
}

impl ResourceManifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resource download.
    ///
    /// Registering the same filename for the same remote URL again is a no-op.
    /// A different remote URL under an existing filename is a
    /// [`ConversionError::DuplicateResource`] and leaves the manifest unchanged.
    pub fn insert(
        &mut self,
        local_filename: impl Into<String>,
        remote_url: impl Into<String>,
    ) -> ConvertResult<()> {
        let local_filename = local_filename.into();
        let remote_url = remote_url.into();

        if let Some(existing) = self.entries.get(&local_filename) {
            if *existing == remote_url {
                return Ok(());
            }
            return Err(ConversionError::DuplicateResource {
                filename: local_filename,
                existing: existing.clone(),
                incoming: remote_url,
            });
        }

        self.entries.insert(local_filename, remote_url);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, local_filename: &str) -> Option<&str> {
        self.entries.get(local_filename).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(local_filename, remote_url)` pairs in filename order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a ResourceManifest {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One converted challenge page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Challenge title from the page heading
    pub title: String,
    /// Canonical URL the page was fetched from
    pub source_url: String,
    /// Markdown rendering of the problem statement
    pub markdown_body: String,
    /// Resources to download next to the Markdown, `None` when there are none
    pub resources: Option<ResourceManifest>,
}
