// Error taxonomy shared by both subcommands
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("dashboard {dashboard_id} referenced by alert {alert_id} was not fetched")]
    MissingDashboard { alert_id: i64, dashboard_id: i64 },

    #[error("panel {panel_id} of dashboard {dashboard_id} referenced by alert {alert_id} does not exist")]
    MissingPanel {
        alert_id: i64,
        dashboard_id: i64,
        panel_id: i64,
    },

    #[error("dashboard {uid} has no numeric id")]
    MissingDashboardId { uid: String },

    #[error("panel {panel_id} appears more than once in dashboard {dashboard_id}")]
    DuplicatePanel { dashboard_id: i64, panel_id: i64 },

    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid dashboard", path.display())]
    InvalidDashboardFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DocsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stale or broken alert configuration rather than a transport problem.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            Self::MissingDashboard { .. }
                | Self::MissingPanel { .. }
                | Self::MissingDashboardId { .. }
                | Self::DuplicatePanel { .. }
        )
    }
}

pub type DocsResult<T> = Result<T, DocsError>;
