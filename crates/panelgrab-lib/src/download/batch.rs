use super::image::{SavedImage, download_image};
use crate::error::PanelgrabError;
use crate::manifest::Manifest;
use indicatif::ProgressBar;
use std::path::Path;

#[derive(Debug)]
pub struct EntryResult {
    pub key: String,
    pub url: String,
    pub outcome: Result<SavedImage, PanelgrabError>,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub results: Vec<EntryResult>,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_err()).count()
    }

    pub fn saved_images(&self) -> impl Iterator<Item = &SavedImage> {
        self.results.iter().filter_map(|r| r.outcome.as_ref().ok())
    }
}

/// Downloads every image entry of `manifest` one after another.
///
/// Individual failures are logged and skipped. File indices start at 1 and
/// only advance on success, so saved files are always numbered without gaps.
/// The progress bar likewise only advances for saved images.
pub async fn download_all(
    client: &reqwest::Client,
    manifest: &Manifest,
    output_dir: &Path,
    progress: &ProgressBar,
) -> BatchOutcome {
    let mut next_index = 1;
    let mut results = Vec::new();

    for entry in manifest.image_entries() {
        let outcome = download_image(client, entry.url, output_dir, next_index).await;

        match &outcome {
            Ok(saved) => {
                next_index += 1;
                progress.inc(1);
                progress.suspend(|| {
                    tracing::debug!(key = entry.key, file = %saved.file_name, "Downloaded");
                });
            }
            Err(err) => {
                progress.suspend(|| {
                    tracing::warn!(key = entry.key, "Error downloading image: {}", err);
                });
            }
        }

        results.push(EntryResult {
            key: entry.key.to_string(),
            url: entry.url.to_string(),
            outcome,
        });
    }

    BatchOutcome { results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestEntry;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn manifest_of(entries: &[(&str, Option<String>)]) -> Manifest {
        let mut manifest = Manifest::default();
        for (key, dhd) in entries {
            manifest
                .data
                .insert(key.to_string(), ManifestEntry { dhd: dhd.clone() });
        }
        manifest
    }

    #[tokio::test]
    async fn test_download_all_failures_do_not_consume_an_index() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"a".to_vec()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/b.gif"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/c.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"c".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let manifest = manifest_of(&[
            ("a", Some(format!("{}/a.jpg", server.uri()))),
            ("b", Some(format!("{}/b.gif", server.uri()))),
            ("c", Some(format!("{}/c.png?size=large", server.uri()))),
            ("d", Some(String::new())),
            ("e", None),
        ]);
        let temp_dir = tempfile::tempdir().unwrap();
        let progress = ProgressBar::hidden();

        let outcome = download_all(
            &reqwest::Client::new(),
            &manifest,
            temp_dir.path(),
            &progress,
        )
        .await;

        assert_eq!(outcome.results.len(), 3);
        assert_eq!(outcome.succeeded(), 2);
        assert_eq!(outcome.failed(), 1);
        assert_eq!(progress.position(), 2);

        let names: Vec<_> = outcome
            .saved_images()
            .map(|saved| saved.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["1.jpg", "2.png"]);
        assert_eq!(std::fs::read(temp_dir.path().join("1.jpg")).unwrap(), b"a");
        assert_eq!(std::fs::read(temp_dir.path().join("2.png")).unwrap(), b"c");
        assert!(!temp_dir.path().join("2.gif").exists());
        assert!(matches!(
            outcome.results[1].outcome,
            Err(PanelgrabError::Fetch { .. })
        ));
    }

    #[tokio::test]
    async fn test_download_all_empty_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();

        let outcome = download_all(
            &reqwest::Client::new(),
            &Manifest::default(),
            temp_dir.path(),
            &ProgressBar::hidden(),
        )
        .await;

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.succeeded(), 0);
        assert_eq!(outcome.failed(), 0);
    }
}
