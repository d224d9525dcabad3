// Subcommand runners - Dependency wiring for each batch job
use crate::application::alert_report_service::AlertReportService;
use crate::application::index_service::{FailurePolicy, IndexService};
use crate::infrastructure::config::load_grafana_config;
use crate::infrastructure::dashboard_files::write_document;
use crate::infrastructure::grafana_repository::GrafanaHttpRepository;
use crate::presentation::cli::{AlertsArgs, IndexArgs};
use crate::presentation::markdown::{render_alert_report, render_index};
use anyhow::Context;
use std::io::Write;
use std::sync::Arc;

pub async fn run_index(args: IndexArgs) -> anyhow::Result<()> {
    let policy = if args.skip_invalid {
        FailurePolicy::Skip
    } else {
        FailurePolicy::Abort
    };

    let service = IndexService::new(args.home, policy);
    let outcome = service
        .build_index(&args.dir)
        .await
        .with_context(|| format!("failed to index dashboards in {}", args.dir.display()))?;

    for skipped in &outcome.skipped {
        tracing::warn!("Left {} out of the index: {}", skipped.path.display(), skipped.error);
    }

    write_document(&args.output, &render_index(&outcome.entries))
        .await
        .context("failed to write dashboard index")?;

    tracing::info!(
        "Wrote {} entries to {}",
        outcome.entries.len(),
        args.output.display()
    );
    Ok(())
}

pub async fn run_alerts(args: AlertsArgs) -> anyhow::Result<()> {
    let config =
        load_grafana_config(args.config.as_deref()).context("failed to load configuration")?;

    let repository = Arc::new(GrafanaHttpRepository::from_config(&config)?);
    let service = AlertReportService::new(repository, config.address.clone(), config.concurrency);

    let entries = match service.build_report().await {
        Ok(entries) => entries,
        Err(err) => {
            if err.is_integrity() {
                tracing::error!(
                    "Alert configuration points at dashboards or panels that no longer exist"
                );
            }
            return Err(anyhow::Error::new(err).context("failed to build alert report"));
        }
    };

    let report = render_alert_report(&config.address, &entries);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
