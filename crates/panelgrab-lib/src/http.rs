use crate::error::PanelgrabError;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpOptions {
    /// Per-request deadline. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

pub fn build_http_client(options: &HttpOptions) -> Result<reqwest::Client, PanelgrabError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(user_agent) = &options.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    Ok(builder.build()?)
}

/// Issues a GET and rejects transport failures and non-2xx statuses.
///
/// The returned response still owns the connection; it is released when the
/// body has been consumed or the response is dropped.
pub async fn get_success(
    client: &reqwest::Client,
    url: &str,
) -> Result<reqwest::Response, PanelgrabError> {
    tracing::debug!(url = %url, "GET");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| PanelgrabError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PanelgrabError::Fetch {
            url: url.to_string(),
            reason: format!("server responded with {}", status),
        });
    }

    Ok(response)
}
