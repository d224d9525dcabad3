// Markdown rendering for the generated documents
use crate::domain::report::{IndexEntry, ReportEntry};

pub const NOTES_ABSENT_MARKER: &str = "None";

const ALERTS_PREAMBLE: &str = "\
> References:
>   * https://grafana.com/docs/grafana/latest/alerting/create-alerts
---
";

/// Markdown links break on raw spaces.
pub fn escape_link_target(target: &str) -> String {
    target.replace(' ', "%20")
}

pub fn render_index_entry(entry: &IndexEntry) -> String {
    format!(
        "## [{}]({})\n\n{}\n",
        entry.title,
        escape_link_target(&entry.path.to_string_lossy()),
        entry.notes.as_deref().unwrap_or(NOTES_ABSENT_MARKER)
    )
}

pub fn render_index(entries: &[IndexEntry]) -> String {
    let mut out = String::from("# Dashboards\n");
    for entry in entries {
        out.push_str(&render_index_entry(entry));
        out.push('\n');
    }
    out
}

pub fn render_report_entry(entry: &ReportEntry) -> String {
    format!(
        "* Name: [{}]({})\n\n  Evaluate: Every {} for {}\n\n  Description: {}\n\n",
        entry.name, entry.link, entry.frequency, entry.window, entry.description
    )
}

pub fn render_alert_report(address: &str, entries: &[ReportEntry]) -> String {
    let mut out = format!("# [Alerts]({}/alerting/list)\n\n", address);
    out.push_str(&format!(
        "Generated by {} {}\n\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(ALERTS_PREAMBLE);
    out.push('\n');
    for entry in entries {
        out.push_str(&render_report_entry(entry));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report_entry(name: &str, description: &str) -> ReportEntry {
        ReportEntry {
            alert_id: 1,
            panel_id: 2,
            name: name.to_string(),
            link: "http://grafana/d/x/y?viewPanel=2".to_string(),
            frequency: "1m".to_string(),
            window: "5m".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_index_entry_block() {
        let entry = IndexEntry::new(
            "T".into(),
            PathBuf::from("dashboards/My Board.json"),
            Some("hello".into()),
        );
        assert_eq!(
            render_index_entry(&entry),
            "## [T](dashboards/My%20Board.json)\n\nhello\n"
        );
    }

    #[test]
    fn test_index_document() {
        let entries = vec![
            IndexEntry::new("A".into(), PathBuf::from("d/a.json"), Some("notes".into())),
            IndexEntry::new("B".into(), PathBuf::from("d/b.json"), None),
        ];
        assert_eq!(
            render_index(&entries),
            "# Dashboards\n## [A](d/a.json)\n\nnotes\n\n## [B](d/b.json)\n\nNone\n\n"
        );
    }

    #[test]
    fn test_empty_index_has_heading_only() {
        assert_eq!(render_index(&[]), "# Dashboards\n");
    }

    #[test]
    fn test_report_entry_block() {
        assert_eq!(
            render_report_entry(&report_entry("Tip stalled", "No new tip")),
            "* Name: [Tip stalled](http://grafana/d/x/y?viewPanel=2)\n\n  \
             Evaluate: Every 1m for 5m\n\n  Description: No new tip\n\n"
        );
    }

    #[test]
    fn test_report_header_and_order() {
        let report = render_alert_report(
            "http://grafana",
            &[report_entry("first", ""), report_entry("second", "")],
        );
        assert!(report.starts_with("# [Alerts](http://grafana/alerting/list)\n\n"));
        assert!(report.contains("> References:\n"));
        let first = report.find("[first]").unwrap();
        let second = report.find("[second]").unwrap();
        assert!(first < second);
    }
}
