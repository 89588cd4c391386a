//! Static catalog data for the coaching dashboard.
//!
//! This module holds the status-category tables and sort-filter options the
//! dashboard UI renders. `cards` owns the literal data, `identity` the stable
//! value tokens, and `CategoryIndex` a validated lookup keyed by status value.

pub mod cards;
pub mod identity;
pub mod index;
pub mod model;

pub use cards::{
    CATEGORY_COUNT, SORT_FILTER_COUNT, sort_filters, status_categories,
    status_categories_for_today,
};
pub use identity::{DashboardView, FilterValue, StatusValue};
pub use index::CategoryIndex;
pub use model::{CatalogExport, SortFilter, StatusCategory};
