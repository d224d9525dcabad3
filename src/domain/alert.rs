// Alert domain models (legacy alerting API)
use serde::Deserialize;

/// Entry of `GET /api/alerts`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub id: i64,
    pub dashboard_uid: String,
}

/// Response of `GET /api/alerts/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlertDetail {
    pub id: i64,
    pub dashboard_id: i64,
    pub panel_id: i64,
    pub settings: AlertSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertSettings {
    pub name: String,
    pub frequency: String,
    #[serde(rename = "for")]
    pub window: String,
}
