// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod dashboard_files;
pub mod grafana_repository;
