use crate::http::HttpOptions;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DownloadParams {
    pub source_url: String,
    pub output_dir: PathBuf,
    pub http: HttpOptions,
    pub report_path: Option<PathBuf>,
    pub allow_failures: bool,
    pub show_progress: bool,
}

#[derive(Debug, Clone)]
pub struct ListParams {
    pub source_url: String,
    pub http: HttpOptions,
}
