mod batch;
mod digest;
mod directory;
mod image;
mod naming;

pub use batch::{BatchOutcome, EntryResult, download_all};
pub use digest::{ContentDigest, ContentDigester};
pub use directory::ensure_directory;
pub use image::{SavedImage, download_image};
pub use naming::{file_extension, output_file_name, strip_query};
