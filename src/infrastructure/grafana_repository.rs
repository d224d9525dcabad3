// Grafana HTTP API repository implementation
use crate::application::grafana_repository::GrafanaRepository;
use crate::domain::alert::{AlertDetail, AlertSummary};
use crate::domain::dashboard::DashboardLookup;
use crate::domain::error::{DocsError, DocsResult};
use crate::infrastructure::config::GrafanaConfig;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GrafanaHttpRepository {
    address: String,
    client: reqwest::Client,
}

impl GrafanaHttpRepository {
    pub fn new(address: &str, token: &str, timeout: Duration) -> DocsResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            DocsError::Config("token contains invalid header characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| DocsError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            address: address.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &GrafanaConfig) -> DocsResult<Self> {
        Self::new(&config.address, &config.token, config.timeout)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DocsResult<T> {
        let url = format!("{}{}", self.address, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| DocsError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DocsError::Status { url, status, body });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| DocsError::Decode { url, source })
    }
}

#[async_trait]
impl GrafanaRepository for GrafanaHttpRepository {
    async fn list_alerts(&self) -> DocsResult<Vec<AlertSummary>> {
        self.get_json("/api/alerts").await
    }

    async fn get_dashboard(&self, uid: &str) -> DocsResult<DashboardLookup> {
        self.get_json(&format!("/api/dashboards/uid/{}", urlencoding::encode(uid)))
            .await
    }

    async fn get_alert(&self, id: i64) -> DocsResult<AlertDetail> {
        self.get_json(&format!("/api/alerts/{}", id)).await
    }
}
