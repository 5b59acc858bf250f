use crate::download::BatchOutcome;
use crate::error::PanelgrabError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// JSON record of a download run, mapping manifest entries to saved files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReport {
    /// Version of the report format
    pub version: u32,
    pub source_url: String,
    pub output_dir: PathBuf,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Entries in download order
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    pub key: String,
    pub url: String,
    #[serde(flatten)]
    pub outcome: ReportOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReportOutcome {
    Saved {
        file: String,
        bytes: u64,
        sha256: String,
    },
    Failed {
        error: String,
    },
}

impl RunReport {
    pub const VERSION: u32 = 1;

    pub fn new(source_url: &str, output_dir: &Path, outcome: &BatchOutcome) -> Self {
        let entries = outcome
            .results
            .iter()
            .map(|result| ReportEntry {
                key: result.key.clone(),
                url: result.url.clone(),
                outcome: match &result.outcome {
                    Ok(saved) => ReportOutcome::Saved {
                        file: saved.file_name.clone(),
                        bytes: saved.digest.bytes,
                        sha256: saved.digest.sha256_hex(),
                    },
                    Err(err) => ReportOutcome::Failed {
                        error: err.to_string(),
                    },
                },
            })
            .collect();

        Self {
            version: Self::VERSION,
            source_url: source_url.to_string(),
            output_dir: output_dir.to_path_buf(),
            total: outcome.results.len(),
            succeeded: outcome.succeeded(),
            failed: outcome.failed(),
            entries,
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), PanelgrabError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| PanelgrabError::ReportWrite {
            path: path.to_path_buf(),
            reason: format!("JSON serialization failed: {}", e),
        })?;
        std::fs::write(path, json).map_err(|e| PanelgrabError::ReportWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, PanelgrabError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::{ContentDigester, EntryResult, SavedImage};

    fn sample_outcome(dir: &Path) -> BatchOutcome {
        let mut digester = ContentDigester::new();
        digester.update(b"abc");

        BatchOutcome {
            results: vec![
                EntryResult {
                    key: "a".to_string(),
                    url: "https://cdn.example.com/a.jpg".to_string(),
                    outcome: Ok(SavedImage {
                        index: 1,
                        file_name: "1.jpg".to_string(),
                        path: dir.join("1.jpg"),
                        digest: digester.finish(),
                    }),
                },
                EntryResult {
                    key: "b".to_string(),
                    url: "https://cdn.example.com/b.jpg".to_string(),
                    outcome: Err(PanelgrabError::Fetch {
                        url: "https://cdn.example.com/b.jpg".to_string(),
                        reason: "server responded with 404 Not Found".to_string(),
                    }),
                },
            ],
        }
    }

    #[test]
    fn test_report_counts_and_entries() {
        let dir = Path::new("downloads");
        let report = RunReport::new("https://example.com/manifest", dir, &sample_outcome(dir));

        assert_eq!(report.version, RunReport::VERSION);
        assert_eq!(report.total, 2);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(
            report.entries[0].outcome,
            ReportOutcome::Saved {
                file: "1.jpg".to_string(),
                bytes: 3,
                sha256: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
                    .to_string(),
            }
        );
        assert!(matches!(
            &report.entries[1].outcome,
            ReportOutcome::Failed { error } if error.contains("404")
        ));
    }

    #[test]
    fn test_report_json_shape() {
        let dir = Path::new("downloads");
        let report = RunReport::new("https://example.com/manifest", dir, &sample_outcome(dir));

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["entries"][0]["outcome"], "saved");
        assert_eq!(value["entries"][0]["file"], "1.jpg");
        assert_eq!(value["entries"][1]["outcome"], "failed");
        assert_eq!(value["entries"][1]["key"], "b");
    }

    #[test]
    fn test_report_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let report_path = temp_dir.path().join("report.json");
        let report = RunReport::new(
            "https://example.com/manifest",
            temp_dir.path(),
            &sample_outcome(temp_dir.path()),
        );

        report.save_to_file(&report_path).unwrap();
        let loaded = RunReport::load_from_file(&report_path).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_report_save_to_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let report_path = temp_dir.path().join("missing").join("report.json");
        let report = RunReport::new(
            "https://example.com/manifest",
            temp_dir.path(),
            &BatchOutcome::default(),
        );

        let result = report.save_to_file(&report_path);

        assert!(matches!(result, Err(PanelgrabError::ReportWrite { .. })));
    }
}
