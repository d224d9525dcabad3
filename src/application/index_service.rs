// Index service - Use case for indexing local dashboard exports
use crate::domain::error::{DocsError, DocsResult};
use crate::domain::report::IndexEntry;
use crate::infrastructure::dashboard_files::{list_dashboard_files, read_dashboard};
use std::path::{Path, PathBuf};

/// What to do with a dashboard file that cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Fail the whole run; nothing gets written
    #[default]
    Abort,
    /// Log the file and leave it out of the index
    Skip,
}

#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: DocsError,
}

#[derive(Debug, Default)]
pub struct IndexOutcome {
    pub entries: Vec<IndexEntry>,
    pub skipped: Vec<SkippedFile>,
}

impl IndexOutcome {
    pub fn missing_notes(&self) -> usize {
        self.entries.iter().filter(|e| e.notes.is_none()).count()
    }
}

#[derive(Debug, Clone)]
pub struct IndexService {
    home_file: String,
    policy: FailurePolicy,
}

impl IndexService {
    pub fn new(home_file: String, policy: FailurePolicy) -> Self {
        Self { home_file, policy }
    }

    /// Collect one entry per dashboard file in `dir`. Entries follow the
    /// file-name order of the listing.
    pub async fn build_index(&self, dir: &Path) -> DocsResult<IndexOutcome> {
        let files = list_dashboard_files(dir, &self.home_file).await?;
        let mut outcome = IndexOutcome::default();

        for path in files {
            let dashboard = match read_dashboard(&path).await {
                Ok(dashboard) => dashboard,
                Err(error) => match self.policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::Skip => {
                        outcome.skipped.push(SkippedFile { path, error });
                        continue;
                    }
                },
            };

            let notes = dashboard.notes();
            if notes.is_none() {
                tracing::warn!(
                    "{} {} does not have \"Notes\" panel",
                    path.display(),
                    dashboard.title
                );
            }

            outcome.entries.push(IndexEntry::new(dashboard.title, path, notes));
        }

        tracing::info!(
            "Indexed {} dashboards ({} without notes, {} skipped)",
            outcome.entries.len(),
            outcome.missing_notes(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dashboard_files::test_support::write_file;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    const WITH_NOTES: &str =
        r#"{"title": "T", "panels": [{"title":"Notes","type":"text","options":{"content":"hello"}}]}"#;

    #[tokio::test]
    async fn test_entry_per_file_in_listing_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.json", r#"{"title": "Bravo", "panels": []}"#);
        let alpha = write_file(dir.path(), "a.json", WITH_NOTES);
        write_file(dir.path(), "Home.json", r#"{"title": "Home", "panels": []}"#);

        let outcome = IndexService::new("Home.json".into(), FailurePolicy::Abort)
            .build_index(dir.path())
            .await
            .unwrap();

        let titles: Vec<_> = outcome.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["T", "Bravo"]);
        assert_eq!(
            outcome.entries[0],
            IndexEntry::new("T".into(), alpha, Some("hello".into()))
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[tokio::test]
    async fn test_missing_notes_warns_once() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "a.json",
            r#"{"title": "A", "panels": [{"title": "cpu", "type": "graph"}]}"#,
        );
        write_file(dir.path(), "b.json", WITH_NOTES);

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);

        let outcome = IndexService::new("Home.json".into(), FailurePolicy::Abort)
            .build_index(dir.path())
            .await
            .unwrap();
        drop(guard);

        assert_eq!(outcome.missing_notes(), 1);
        assert_eq!(outcome.entries[0].notes, None);

        let output = logs.contents();
        let warnings: Vec<_> = output
            .lines()
            .filter(|line| line.contains("does not have \"Notes\" panel"))
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("a.json"));
        assert!(warnings[0].contains("WARN"));
    }

    #[tokio::test]
    async fn test_abort_policy_fails_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.json", WITH_NOTES);
        write_file(dir.path(), "b.json", r#"{"panels": []}"#);

        let err = IndexService::new("Home.json".into(), FailurePolicy::Abort)
            .build_index(dir.path())
            .await
            .unwrap_err();

        assert!(matches!(err, DocsError::InvalidDashboardFile { .. }));
    }

    #[tokio::test]
    async fn test_skip_policy_keeps_going() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.json", "not json");
        write_file(dir.path(), "b.json", WITH_NOTES);

        let outcome = IndexService::new("Home.json".into(), FailurePolicy::Skip)
            .build_index(dir.path())
            .await
            .unwrap();

        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.skipped[0].path.ends_with("a.json"));
    }
}
