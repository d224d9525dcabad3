// Derived document entries
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub title: String,
    pub path: PathBuf,
    pub notes: Option<String>,
}

impl IndexEntry {
    pub fn new(title: String, path: PathBuf, notes: Option<String>) -> Self {
        Self { title, path, notes }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub alert_id: i64,
    pub panel_id: i64,
    pub name: String,
    pub link: String,
    pub frequency: String,
    pub window: String,
    pub description: String,
}
