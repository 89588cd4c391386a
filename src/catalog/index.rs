//! Indexed view of one status-category table.
//!
//! The index enforces the structural invariants the dashboard relies on and
//! provides fast lookup by status value. It is intentionally strict about
//! duplicates and misplaced overlay copy so a bad table edit fails loudly
//! instead of rendering a broken dashboard.

use crate::catalog::cards::{CATEGORY_COUNT, status_categories};
use crate::catalog::identity::{DashboardView, StatusValue};
use crate::catalog::model::StatusCategory;
use anyhow::{Result, bail};
use std::collections::BTreeMap;

#[derive(Debug)]
/// One view's status table plus a derived index keyed by status value.
pub struct CategoryIndex {
    view: DashboardView,
    records: Vec<StatusCategory>,
    by_value: BTreeMap<StatusValue, usize>,
}

impl CategoryIndex {
    /// Build and validate an index over the shipped table for `view`.
    pub fn for_view(view: DashboardView) -> Result<Self> {
        Self::build(view, status_categories(view))
    }

    /// Build an index over an explicit record sequence.
    ///
    /// Validates record count, non-empty copy, value uniqueness, and that
    /// overlay text sits only on the first record.
    pub fn build(view: DashboardView, records: Vec<StatusCategory>) -> Result<Self> {
        if records.len() != CATEGORY_COUNT {
            bail!(
                "{} table has {} records, expected {}",
                view.as_str(),
                records.len(),
                CATEGORY_COUNT
            );
        }

        let mut by_value = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            if record.label.trim().is_empty() {
                bail!("record {} in {} table has an empty label", position, view.as_str());
            }
            if record.description.trim().is_empty() {
                bail!(
                    "record {} in {} table has an empty description",
                    position,
                    view.as_str()
                );
            }
            match (position, &record.overlay_text) {
                (0, None) => bail!("{} table is missing overlay text on its first record", view.as_str()),
                (0, Some(text)) if text.trim().is_empty() => {
                    bail!("{} table has empty overlay text", view.as_str())
                }
                (_, Some(_)) if position != 0 => bail!(
                    "record {} ({}) in {} table carries overlay text; only the first record may",
                    position,
                    record.value.as_str(),
                    view.as_str()
                ),
                _ => {}
            }
            if by_value.insert(record.value.clone(), position).is_some() {
                bail!(
                    "duplicate status value {} in {} table",
                    record.value.as_str(),
                    view.as_str()
                );
            }
        }

        Ok(Self {
            view,
            records,
            by_value,
        })
    }

    pub fn view(&self) -> DashboardView {
        self.view
    }

    /// Resolve a category by its status value.
    ///
    /// Returns `None` instead of erroring; the caller decides how to surface
    /// an upstream status token this table does not cover.
    pub fn category(&self, value: &StatusValue) -> Option<&StatusCategory> {
        self.by_value
            .get(value)
            .map(|&position| &self.records[position])
    }

    /// Iterates status values in severity order (most severe first).
    pub fn values(&self) -> impl Iterator<Item = &StatusValue> {
        self.records.iter().map(|record| &record.value)
    }

    /// The underlying records in severity order.
    pub fn records(&self) -> &[StatusCategory] {
        &self.records
    }
}
