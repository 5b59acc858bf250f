use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Manifest endpoint used when neither the command line nor the config file names one.
pub const DEFAULT_SOURCE_URL: &str =
    "https://storage.googleapis.com/panels-api/data/20240916/media-1a-i-p~s";

/// Output directory used when neither the command line nor the config file names one.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    /// Where to write the JSON run report, if anywhere
    pub report: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}
