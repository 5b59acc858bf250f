use super::digest::{ContentDigest, ContentDigester};
use super::naming::output_file_name;
use crate::error::PanelgrabError;
use crate::http::get_success;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedImage {
    pub index: usize,
    pub file_name: String,
    pub path: PathBuf,
    pub digest: ContentDigest,
}

/// Downloads one image into `output_dir` as `{index}{extension}`.
///
/// The body is streamed into a hidden `.part` sibling which is renamed into
/// place only once fully written, so a failed download never leaves a
/// truncated image behind. An existing file with the same name is replaced.
pub async fn download_image(
    client: &reqwest::Client,
    url: &str,
    output_dir: &Path,
    index: usize,
) -> Result<SavedImage, PanelgrabError> {
    let response = get_success(client, url).await?;

    let file_name = output_file_name(index, url);
    let output_path = output_dir.join(&file_name);
    let partial_path = output_dir.join(format!(".{}.part", file_name));

    let file = tokio::fs::File::create(&partial_path)
        .await
        .map_err(|e| PanelgrabError::Write {
            path: partial_path.clone(),
            reason: format!("Couldn't create file: {}", e),
        })?;

    let digest = match write_body(response, file, &output_path).await {
        Ok(digest) => digest,
        Err(err) => {
            discard_partial(&partial_path).await;
            return Err(err);
        }
    };

    if let Err(e) = tokio::fs::rename(&partial_path, &output_path).await {
        discard_partial(&partial_path).await;
        return Err(PanelgrabError::Write {
            path: output_path,
            reason: format!("Couldn't move download into place: {}", e),
        });
    }

    tracing::debug!(
        url = %url,
        output = %output_path.display(),
        bytes = digest.bytes,
        sha256 = %digest.sha256_hex(),
        "Saved image"
    );

    Ok(SavedImage {
        index,
        file_name,
        path: output_path,
        digest,
    })
}

async fn write_body(
    response: reqwest::Response,
    file: tokio::fs::File,
    output_path: &Path,
) -> Result<ContentDigest, PanelgrabError> {
    let write_error = |reason: String| PanelgrabError::Write {
        path: output_path.to_path_buf(),
        reason,
    };

    let mut digester = ContentDigester::new();
    let mut writer = BufWriter::new(file);
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| write_error(format!("Couldn't read response body: {}", e)))?;
        digester.update(&chunk);
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| write_error(format!("Couldn't write file: {}", e)))?;
    }

    writer
        .flush()
        .await
        .map_err(|e| write_error(format!("Couldn't flush file: {}", e)))?;

    Ok(digester.finish())
}

async fn discard_partial(partial_path: &Path) {
    if let Err(e) = tokio::fs::remove_file(partial_path).await {
        tracing::debug!(
            path = %partial_path.display(),
            "Couldn't remove partial download: {}",
            e
        );
    }
}
