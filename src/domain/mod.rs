// Domain layer - Dashboards, alerts and the entries derived from them
pub mod alert;
pub mod dashboard;
pub mod error;
pub mod report;
