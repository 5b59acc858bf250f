use crate::cli::args::Command;
use crate::cli::params::{DownloadParams, ListParams};
use crate::config::{Config, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_URL, load_config};
use crate::error::PanelgrabError;
use crate::http::HttpOptions;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Download(DownloadParams),
    List(ListParams),
}

/// Merges command line options over the config file over built-in defaults.
pub fn resolve_command(command: Command) -> Result<ResolvedCommand, PanelgrabError> {
    match command {
        Command::Download {
            config_path,
            source_url,
            output_dir,
            timeout_secs,
            user_agent,
            report_path,
            allow_failures,
            no_progress,
        } => {
            let app_config = load_optional_config(config_path.as_deref())?;
            let source_url = resolve_source_url(source_url, &app_config)?;
            let http = resolve_http_options(timeout_secs, user_agent, &app_config)?;

            let output_dir = output_dir
                .map(PathBuf::from)
                .or_else(|| app_config.output.path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
            if output_dir.as_os_str().is_empty() {
                return Err(PanelgrabError::CliArgumentValidation {
                    details: "Output directory must not be empty.".to_string(),
                });
            }

            let report_path = report_path
                .map(PathBuf::from)
                .or_else(|| app_config.output.report.clone());

            Ok(ResolvedCommand::Download(DownloadParams {
                source_url,
                output_dir,
                http,
                report_path,
                allow_failures,
                show_progress: !no_progress,
            }))
        }
        Command::List {
            config_path,
            source_url,
            timeout_secs,
            user_agent,
        } => {
            let app_config = load_optional_config(config_path.as_deref())?;
            let source_url = resolve_source_url(source_url, &app_config)?;
            let http = resolve_http_options(timeout_secs, user_agent, &app_config)?;

            Ok(ResolvedCommand::List(ListParams { source_url, http }))
        }
    }
}

fn load_optional_config(config_path: Option<&str>) -> Result<Config, PanelgrabError> {
    match config_path {
        Some(config_path) => {
            tracing::debug!("Loading configuration from {}", config_path);
            load_config(config_path)
        }
        None => Ok(Config::default()),
    }
}

fn resolve_source_url(
    source_url: Option<String>,
    app_config: &Config,
) -> Result<String, PanelgrabError> {
    let source_url = source_url
        .or_else(|| app_config.source.url.clone())
        .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());

    let parsed =
        reqwest::Url::parse(&source_url).map_err(|e| PanelgrabError::CliArgumentValidation {
            details: format!("Invalid source URL {}: {}", source_url, e),
        })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PanelgrabError::CliArgumentValidation {
            details: format!(
                "Unsupported source URL scheme {:?}; expected http or https.",
                parsed.scheme()
            ),
        });
    }

    Ok(source_url)
}

fn resolve_http_options(
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
    app_config: &Config,
) -> Result<HttpOptions, PanelgrabError> {
    let timeout_secs = timeout_secs.or(app_config.http.timeout_secs);
    if timeout_secs == Some(0) {
        return Err(PanelgrabError::CliArgumentValidation {
            details: "timeout must be greater than 0.".to_string(),
        });
    }

    Ok(HttpOptions {
        timeout: timeout_secs.map(Duration::from_secs),
        user_agent: user_agent.or_else(|| app_config.http.user_agent.clone()),
    })
}
