// Application layer - Use cases
pub mod alert_report_service;
pub mod grafana_repository;
pub mod index_service;
