use serde::{Deserialize, Serialize};

/// Row of the distinct-species query. Aggregate columns arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRow {
    pub spc_common: Option<String>,
    pub count_tree_id: Option<String>,
}

/// One raw tree row from a per-borough health query.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthRow {
    pub spc_common: Option<String>,
    pub health: Option<String>,
}

/// One grouped row from the steward query.
#[derive(Debug, Clone, Deserialize)]
pub struct StewardRow {
    pub steward: Option<String>,
    pub health: Option<String>,
    pub count_tree_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCount {
    pub borough: String,
    pub health: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StewardGroup {
    Natural,
    Steward,
}

impl StewardGroup {
    pub fn label(self) -> &'static str {
        match self {
            StewardGroup::Natural => "natural",
            StewardGroup::Steward => "steward",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareRow {
    pub group: StewardGroup,
    pub health: String,
    pub num_trees: u64,
    pub total: u64,
    pub share: f64,
}

#[derive(Debug, Deserialize)]
pub struct HealthChartParams {
    #[serde(default)]
    pub species: String,
}

#[derive(Debug, Deserialize)]
pub struct StewardChartParams {
    #[serde(default)]
    pub borough: String,
    #[serde(default)]
    pub species: String,
}

/// Grouped bar chart description consumed by the page renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub x_label: String,
    pub y_label: String,
    pub bar_mode: &'static str,
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
}
