mod fetch;
mod types;

pub use fetch::{fetch_manifest, parse_manifest, parse_manifest_bytes};
pub use types::{ImageEntry, Manifest, ManifestEntry, count_images};
