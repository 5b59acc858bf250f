use super::types::Manifest;
use crate::error::PanelgrabError;
use crate::http::get_success;

pub async fn fetch_manifest(
    client: &reqwest::Client,
    source_url: &str,
) -> Result<reqwest::Response, PanelgrabError> {
    tracing::info!("Fetching data from: {}", source_url);
    get_success(client, source_url).await
}

/// Consumes the manifest response and decodes it.
pub async fn parse_manifest(response: reqwest::Response) -> Result<Manifest, PanelgrabError> {
    let url = response.url().to_string();
    let body = response
        .bytes()
        .await
        .map_err(|e| PanelgrabError::Fetch {
            url,
            reason: format!("Couldn't read response body: {}", e),
        })?;

    parse_manifest_bytes(&body)
}

pub fn parse_manifest_bytes(body: &[u8]) -> Result<Manifest, PanelgrabError> {
    serde_json::from_slice(body).map_err(|e| PanelgrabError::Parse {
        reason: e.to_string(),
    })
}
