use crate::cli::ListParams;
use crate::download::output_file_name;
use crate::error::PanelgrabError;
use crate::http::build_http_client;
use crate::manifest::{count_images, fetch_manifest, parse_manifest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedImage {
    pub key: String,
    pub url: String,
    /// Name the image gets if every download before it succeeds
    pub file_name: String,
}

/// Prints the images a download run would fetch, in download order.
pub async fn run_list(params: ListParams) -> Result<Vec<ListedImage>, PanelgrabError> {
    let ListParams { source_url, http } = params;

    let client = build_http_client(&http)?;
    let response = fetch_manifest(&client, &source_url).await?;
    let manifest = parse_manifest(response).await?;

    tracing::info!("Total images to download: {}", count_images(&manifest));

    let listed: Vec<ListedImage> = manifest
        .image_entries()
        .enumerate()
        .map(|(i, entry)| ListedImage {
            key: entry.key.to_string(),
            url: entry.url.to_string(),
            file_name: output_file_name(i + 1, entry.url),
        })
        .collect();

    for image in &listed {
        println!("{}\t{}\t{}", image.file_name, image.key, image.url);
    }

    Ok(listed)
}
