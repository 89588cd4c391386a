//! Static status-category and sort-filter tables for the coaching dashboard.
//!
//! The crate exposes the record types and table-producing functions the
//! dashboard UI renders from: `status_categories` selects one of two fixed
//! five-record tables by view, `sort_filters` is the athlete-list filter
//! control, and `CategoryIndex` resolves a computed athlete status token to
//! its display record. `contract` validates the exported JSON document
//! against the schema the UI codes against.

pub mod catalog;
pub mod contract;

pub use catalog::{
    CATEGORY_COUNT, CatalogExport, CategoryIndex, DashboardView, FilterValue, SORT_FILTER_COUNT,
    SortFilter, StatusCategory, StatusValue, sort_filters, status_categories,
    status_categories_for_today,
};
pub use contract::{export_schema, validate_export};
