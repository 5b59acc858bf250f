use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level manifest document.
///
/// Entries are kept in key order so that images are always visited, and
/// therefore numbered, the same way for the same manifest.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Manifest {
    pub data: BTreeMap<String, ManifestEntry>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ManifestEntry {
    /// High-resolution image URL
    pub dhd: Option<String>,
}

impl ManifestEntry {
    /// The image URL, if present and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        self.dhd.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageEntry<'a> {
    pub key: &'a str,
    pub url: &'a str,
}

impl Manifest {
    /// Entries carrying a downloadable image, in download order.
    pub fn image_entries(&self) -> impl Iterator<Item = ImageEntry<'_>> {
        self.data.iter().filter_map(|(key, entry)| {
            entry.image_url().map(|url| ImageEntry {
                key: key.as_str(),
                url,
            })
        })
    }
}

pub fn count_images(manifest: &Manifest) -> usize {
    manifest
        .data
        .values()
        .filter(|entry| entry.image_url().is_some())
        .count()
}
