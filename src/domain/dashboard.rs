// Dashboard domain model
use serde::Deserialize;

pub const NOTES_PANEL_TITLE: &str = "Notes";
pub const NOTES_PANEL_TYPE: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Panel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub panel_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: PanelOptions,
    /// Children of a collapsed row panel
    #[serde(default)]
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelOptions {
    #[serde(default)]
    pub content: Option<String>,
}

/// Response of `GET /api/dashboards/uid/{uid}`
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardLookup {
    pub dashboard: Dashboard,
    pub meta: DashboardMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardMeta {
    pub url: String,
}

impl Dashboard {
    /// All panels, depth-first, with row panels before their children.
    pub fn flattened_panels(&self) -> Vec<&Panel> {
        let mut out = Vec::with_capacity(self.panels.len());
        for panel in &self.panels {
            panel.collect_into(&mut out);
        }
        out
    }

    /// Content of the first text panel titled "Notes", if any.
    pub fn notes(&self) -> Option<String> {
        self.flattened_panels()
            .into_iter()
            .find(|p| p.is_notes())
            .map(|p| p.options.content.clone().unwrap_or_default())
    }
}

impl Panel {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Panel>) {
        out.push(self);
        for child in &self.panels {
            child.collect_into(out);
        }
    }

    pub fn is_notes(&self) -> bool {
        self.title == NOTES_PANEL_TITLE && self.panel_type == NOTES_PANEL_TYPE
    }

    /// Description collapsed onto a single line.
    pub fn single_line_description(&self) -> String {
        self.description
            .as_deref()
            .unwrap_or_default()
            .replace("\r\n", " ")
            .replace('\n', " ")
    }
}
