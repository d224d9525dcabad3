// Alert report service - Joins alerts to their dashboards and panels
use crate::application::grafana_repository::GrafanaRepository;
use crate::domain::alert::{AlertDetail, AlertSummary};
use crate::domain::dashboard::{Dashboard, Panel};
use crate::domain::error::{DocsError, DocsResult};
use crate::domain::report::ReportEntry;
use futures::{StreamExt, TryStreamExt, stream};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// A fetched dashboard together with its relative URL (`meta.url`).
#[derive(Debug, Clone)]
pub struct ResolvedDashboard {
    pub id: i64,
    pub url: String,
    pub dashboard: Dashboard,
}

pub type PanelIndex<'a> = HashMap<(i64, i64), &'a Panel>;

#[derive(Clone)]
pub struct AlertReportService {
    repository: Arc<dyn GrafanaRepository>,
    address: String,
    concurrency: usize,
}

impl AlertReportService {
    pub fn new(
        repository: Arc<dyn GrafanaRepository>,
        address: String,
        concurrency: usize,
    ) -> Self {
        Self {
            repository,
            address,
            concurrency: concurrency.max(1),
        }
    }

    /// Build every report entry, ordered by panel id then alert id.
    ///
    /// Nothing is returned unless every alert joins cleanly.
    pub async fn build_report(&self) -> DocsResult<Vec<ReportEntry>> {
        let alerts = self.fetch_alerts().await?;
        let dashboards = self.resolve_dashboards(&alerts).await?;
        let panels = index_panels(dashboards.values())?;

        let mut details = self.fetch_alert_details(&alerts).await?;
        sort_alert_details(&mut details);

        let by_id: HashMap<i64, &ResolvedDashboard> =
            dashboards.values().map(|d| (d.id, d)).collect();

        let entries = details
            .iter()
            .map(|detail| self.report_entry(detail, &by_id, &panels))
            .collect::<DocsResult<Vec<_>>>()?;

        tracing::info!(
            "Built alert report with {} entries from {} dashboards",
            entries.len(),
            dashboards.len()
        );
        Ok(entries)
    }

    pub async fn fetch_alerts(&self) -> DocsResult<Vec<AlertSummary>> {
        let alerts = self.repository.list_alerts().await?;
        tracing::debug!("Fetched {} alerts", alerts.len());
        Ok(alerts)
    }

    /// Fetch each distinct dashboard referenced by `alerts` exactly once.
    pub async fn resolve_dashboards(
        &self,
        alerts: &[AlertSummary],
    ) -> DocsResult<BTreeMap<String, ResolvedDashboard>> {
        let mut dashboards = BTreeMap::new();

        for alert in alerts {
            if dashboards.contains_key(&alert.dashboard_uid) {
                continue;
            }

            let lookup = self.repository.get_dashboard(&alert.dashboard_uid).await?;
            let id = lookup
                .dashboard
                .id
                .ok_or_else(|| DocsError::MissingDashboardId {
                    uid: alert.dashboard_uid.clone(),
                })?;

            tracing::debug!(
                "Resolved dashboard {} (id {}) at {}",
                alert.dashboard_uid,
                id,
                lookup.meta.url
            );
            dashboards.insert(
                alert.dashboard_uid.clone(),
                ResolvedDashboard {
                    id,
                    url: lookup.meta.url,
                    dashboard: lookup.dashboard,
                },
            );
        }

        Ok(dashboards)
    }

    /// Fetch alert details with at most `concurrency` requests in flight.
    /// Results keep the order of `alerts`, matched by alert id. An id listed
    /// more than once is fetched and reported once.
    pub async fn fetch_alert_details(
        &self,
        alerts: &[AlertSummary],
    ) -> DocsResult<Vec<AlertDetail>> {
        let mut seen = HashSet::with_capacity(alerts.len());
        let mut ids = Vec::with_capacity(alerts.len());
        for alert in alerts {
            if seen.insert(alert.id) {
                ids.push(alert.id);
            } else {
                tracing::warn!("Alert {} is listed more than once; reporting it once", alert.id);
            }
        }

        let repository = self.repository.as_ref();
        let mut fetched: HashMap<i64, AlertDetail> = stream::iter(ids.iter().copied())
            .map(|id| async move { repository.get_alert(id).await.map(|detail| (id, detail)) })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        Ok(ids.iter().filter_map(|id| fetched.remove(id)).collect())
    }

    fn report_entry(
        &self,
        detail: &AlertDetail,
        dashboards: &HashMap<i64, &ResolvedDashboard>,
        panels: &PanelIndex<'_>,
    ) -> DocsResult<ReportEntry> {
        let dashboard = dashboards
            .get(&detail.dashboard_id)
            .ok_or(DocsError::MissingDashboard {
                alert_id: detail.id,
                dashboard_id: detail.dashboard_id,
            })?;

        let panel = panels
            .get(&(detail.dashboard_id, detail.panel_id))
            .ok_or(DocsError::MissingPanel {
                alert_id: detail.id,
                dashboard_id: detail.dashboard_id,
                panel_id: detail.panel_id,
            })?;

        Ok(ReportEntry {
            alert_id: detail.id,
            panel_id: detail.panel_id,
            name: detail.settings.name.clone(),
            link: format!("{}{}?viewPanel={}", self.address, dashboard.url, detail.panel_id),
            frequency: detail.settings.frequency.clone(),
            window: detail.settings.window.clone(),
            description: panel.single_line_description(),
        })
    }
}

/// Flatten every dashboard's panels into a `(dashboard id, panel id)` lookup.
pub fn index_panels<'a>(
    dashboards: impl IntoIterator<Item = &'a ResolvedDashboard>,
) -> DocsResult<PanelIndex<'a>> {
    let mut index = HashMap::new();

    for resolved in dashboards {
        for panel in resolved.dashboard.flattened_panels() {
            // Panels without an id cannot carry alerts
            let Some(panel_id) = panel.id else { continue };
            if index.insert((resolved.id, panel_id), panel).is_some() {
                return Err(DocsError::DuplicatePanel {
                    dashboard_id: resolved.id,
                    panel_id,
                });
            }
        }
    }

    Ok(index)
}

pub fn sort_alert_details(details: &mut [AlertDetail]) {
    details.sort_by_key(|d| (d.panel_id, d.id));
}
