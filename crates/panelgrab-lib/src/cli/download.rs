use crate::cli::DownloadParams;
use crate::download::{download_all, ensure_directory};
use crate::error::PanelgrabError;
use crate::http::build_http_client;
use crate::manifest::{count_images, fetch_manifest, parse_manifest};
use crate::progress::download_progress_bar;
use crate::report::RunReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Turns a run with failed downloads into an error unless failures are tolerated.
    pub fn check(&self, allow_failures: bool) -> Result<(), PanelgrabError> {
        if self.failed > 0 && !allow_failures {
            return Err(PanelgrabError::DownloadsFailed {
                failed: self.failed,
                total: self.total,
            });
        }
        Ok(())
    }
}

/// Fetches the manifest and downloads every image it lists.
///
/// Failures up to and including preparing the output directory abort the run
/// before anything is downloaded. Failures of individual images are logged and
/// counted in the returned summary.
pub async fn run_download(params: DownloadParams) -> Result<RunSummary, PanelgrabError> {
    let DownloadParams {
        source_url,
        output_dir,
        http,
        report_path,
        allow_failures: _,
        show_progress,
    } = params;

    let client = build_http_client(&http)?;

    let response = fetch_manifest(&client, &source_url).await?;
    let manifest = parse_manifest(response).await?;

    let image_count = count_images(&manifest);
    tracing::info!("Total images to download: {}", image_count);

    if ensure_directory(&output_dir).await? {
        tracing::info!("Created directory: {}", output_dir.display());
    }

    let progress = download_progress_bar(image_count as u64, show_progress);
    let outcome = download_all(&client, &manifest, &output_dir, &progress).await;
    progress.finish();

    let summary = RunSummary {
        total: image_count,
        succeeded: outcome.succeeded(),
        failed: outcome.failed(),
    };

    tracing::info!(
        "{}/{} images downloaded successfully",
        summary.succeeded,
        summary.total
    );
    if summary.failed > 0 {
        tracing::warn!("{} images failed to download", summary.failed);
    }

    if let Some(report_path) = report_path {
        RunReport::new(&source_url, &output_dir, &outcome).save_to_file(&report_path)?;
        tracing::info!("Run report written to {}", report_path.display());
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_check() {
        let clean = RunSummary {
            total: 3,
            succeeded: 3,
            failed: 0,
        };
        let partial = RunSummary {
            total: 3,
            succeeded: 2,
            failed: 1,
        };

        assert!(clean.check(false).is_ok());
        assert!(partial.check(true).is_ok());
        assert!(matches!(
            partial.check(false),
            Err(PanelgrabError::DownloadsFailed {
                failed: 1,
                total: 3
            })
        ));
    }
}
