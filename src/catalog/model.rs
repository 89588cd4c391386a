//! Record types for the dashboard's static catalog data.
//!
//! These structs mirror the JSON the dashboard UI consumes. Use
//! `CategoryIndex` for validation and value lookup; use these types when the
//! full record surface is required (labels, descriptions, overlay copy).

use crate::catalog::identity::{DashboardView, FilterValue, StatusValue};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One status-category card rendered on the coaching dashboard.
pub struct StatusCategory {
    /// Short uppercase display string, unique within a table.
    pub label: String,
    /// Lookup key matched against the athlete status computed upstream.
    pub value: StatusValue,
    /// Recommended-action copy shown under the label.
    pub description: String,
    /// Tooltip shown while no data exists yet; only the first (most severe)
    /// record in a table carries this.
    #[serde(
        rename = "overlayText",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub overlay_text: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One option in the athlete-list sort/filter control.
pub struct SortFilter {
    pub label: String,
    pub value: FilterValue,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Full catalog document exported for the dashboard UI.
pub struct CatalogExport {
    pub view: DashboardView,
    pub status_categories: Vec<StatusCategory>,
    pub sort_filters: Vec<SortFilter>,
}

impl CatalogExport {
    /// Assemble the export document for one dashboard view.
    pub fn for_view(view: DashboardView) -> Self {
        Self {
            view,
            status_categories: crate::catalog::cards::status_categories(view),
            sort_filters: crate::catalog::cards::sort_filters(),
        }
    }
}
