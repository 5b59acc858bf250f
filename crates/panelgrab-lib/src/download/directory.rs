use crate::error::PanelgrabError;
use std::io::ErrorKind;
use std::path::Path;

/// Makes sure `path` is a directory, creating it (single level) when absent.
///
/// Returns `true` when the directory was created by this call.
pub async fn ensure_directory(path: &Path) -> Result<bool, PanelgrabError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(false),
        Ok(_) => Err(PanelgrabError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tokio::fs::create_dir(path)
                .await
                .map_err(|e| PanelgrabError::Directory {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            Ok(true)
        }
        Err(e) => Err(PanelgrabError::Directory {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
