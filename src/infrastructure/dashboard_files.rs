// Local dashboard export files
use crate::domain::dashboard::Dashboard;
use crate::domain::error::{DocsError, DocsResult};
use std::path::{Path, PathBuf};

pub const DASHBOARD_EXTENSION: &str = "json";

/// List `*.json` regular files in `dir`, sorted by file name, skipping `home_file`.
pub async fn list_dashboard_files(dir: &Path, home_file: &str) -> DocsResult<Vec<PathBuf>> {
    let mut reader = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| DocsError::io(dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(|e| DocsError::io(dir, e))? {
        let path = entry.path();

        let is_dashboard = path
            .extension()
            .is_some_and(|ext| ext == DASHBOARD_EXTENSION);
        if !is_dashboard || entry.file_name() == home_file {
            continue;
        }

        // Follows symlinks
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| DocsError::io(&path, e))?;
        if metadata.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

pub async fn read_dashboard(path: &Path) -> DocsResult<Dashboard> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DocsError::io(path, e))?;

    serde_json::from_str(&raw).map_err(|source| DocsError::InvalidDashboardFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite `path` with `contents`.
pub async fn write_document(path: &Path, contents: &str) -> DocsResult<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| DocsError::io(path, e))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::write_file;
    use super::*;

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.json", "{}");
        write_file(dir.path(), "a.json", "{}");
        write_file(dir.path(), "Home.json", "{}");
        write_file(dir.path(), "readme.md", "");
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = list_dashboard_files(dir.path(), "Home.json").await.unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[tokio::test]
    async fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_dashboard_files(&dir.path().join("nope"), "Home.json")
            .await
            .unwrap_err();
        assert!(matches!(err, DocsError::Io { .. }));
    }

    #[tokio::test]
    async fn test_read_dashboard_rejects_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "broken.json", r#"{"title": "no panels"}"#);

        let err = read_dashboard(&path).await.unwrap_err();
        assert!(matches!(err, DocsError::InvalidDashboardFile { .. }));
    }

    #[tokio::test]
    async fn test_write_document_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "out.md", "old contents that are longer");

        write_document(&path, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
