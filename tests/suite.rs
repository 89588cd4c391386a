// Centralized integration suite for the catalog crate; exercises the table
// contract end to end (record shape, serialized key names, schema validation,
// file round-trip) so a data edit that breaks the dashboard surfaces here.

use anyhow::{Context, Result};
use readiness_catalog::{
    CATEGORY_COUNT, CatalogExport, CategoryIndex, DashboardView, FilterValue, SORT_FILTER_COUNT,
    SortFilter, StatusCategory, StatusValue, sort_filters, status_categories,
    status_categories_for_today, validate_export,
};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn today_table_matches_the_dashboard_contract() {
    let records = status_categories_for_today(true);
    assert_eq!(records.len(), CATEGORY_COUNT);
    assert_eq!(
        records[0].value,
        StatusValue::SeekMedEvalToClearForTraining
    );
    assert!(records[0].overlay_text.is_some());
    assert!(records[1..].iter().all(|r| r.overlay_text.is_none()));

    let values: BTreeSet<&str> = records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values.len(), CATEGORY_COUNT, "values must be pairwise distinct");
}

#[test]
fn historical_table_matches_the_dashboard_contract() {
    let records = status_categories_for_today(false);
    assert_eq!(records.len(), CATEGORY_COUNT);
    assert_eq!(
        records[0].value,
        StatusValue::SeekMedEvalToClearForTraining
    );
    assert!(records[0].overlay_text.is_some());
    assert_ne!(
        records[0].overlay_text,
        status_categories_for_today(true)[0].overlay_text,
        "overlay copy must differ between views"
    );
    assert!(records[1..].iter().all(|r| r.overlay_text.is_none()));
}

// Pinned records from the shipped copy deck; wording changes here must ship
// together with the matching upstream change.
#[test]
fn pinned_records_match_the_copy_deck() {
    let today = status_categories(DashboardView::Today);
    assert_eq!(
        today[1],
        StatusCategory {
            label: "ADAPT TRAINING TO AVOID SYMPTOMS".to_string(),
            value: StatusValue::AdaptTrainingToAvoidSymptoms,
            description:
                "Modify intensity, movements & drills to prevent severe pain & soreness from worsening"
                    .to_string(),
            overlay_text: None,
        }
    );

    let historical = status_categories(DashboardView::Historical);
    assert_eq!(
        historical[4],
        StatusCategory {
            label: "AT RISK OF UNDERTRAINING".to_string(),
            value: StatusValue::AtRiskOfUndertraining,
            description:
                "Unless tapering, increase load with longer or higher intensity session or supplemental session"
                    .to_string(),
            overlay_text: None,
        }
    );
}

#[test]
fn serialized_records_use_the_ui_key_names() {
    let today = status_categories(DashboardView::Today);

    let first = serde_json::to_value(&today[0]).unwrap();
    assert_eq!(
        first.get("overlayText").and_then(Value::as_str),
        Some("When an athlete completes a survey, their status will update here.")
    );
    assert_eq!(
        first.get("value").and_then(Value::as_str),
        Some("seek_med_eval_to_clear_for_training")
    );

    // Non-first records must omit the overlay key entirely, not emit null.
    let second = serde_json::to_value(&today[1]).unwrap();
    assert!(second.get("overlayText").is_none());
    let keys: BTreeSet<&str> = second
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, BTreeSet::from(["description", "label", "value"]));
}

#[test]
fn sort_filters_expose_the_three_fixed_options() {
    let filters = sort_filters();
    assert_eq!(filters.len(), SORT_FILTER_COUNT);
    assert_eq!(
        filters,
        vec![
            SortFilter {
                label: "VIEW ALL".to_string(),
                value: FilterValue::ViewAll,
            },
            SortFilter {
                label: "CLEARED TO TRAIN".to_string(),
                value: FilterValue::ClearedToPlay,
            },
            SortFilter {
                label: "NOT CLEARED TO TRAIN".to_string(),
                value: FilterValue::NotClearedToPlay,
            },
        ]
    );
}

#[test]
fn index_resolves_every_shipped_value_in_both_views() -> Result<()> {
    for view in [DashboardView::Today, DashboardView::Historical] {
        let index = CategoryIndex::for_view(view)?;
        for record in status_categories(view) {
            let resolved = index
                .category(&record.value)
                .with_context(|| format!("missing {} in {} index", record.value.as_str(), view.as_str()))?;
            assert_eq!(resolved, &record);
        }
        let ordered: Vec<&StatusValue> = index.values().collect();
        assert_eq!(ordered.len(), CATEGORY_COUNT);
        assert_eq!(ordered[0], &StatusValue::SeekMedEvalToClearForTraining);
    }
    Ok(())
}

#[test]
fn export_documents_validate_against_the_shipped_schema() -> Result<()> {
    for view in [DashboardView::Today, DashboardView::Historical] {
        let document = serde_json::to_value(CatalogExport::for_view(view))?;
        validate_export(&document)
            .with_context(|| format!("{} export failed contract validation", view.as_str()))?;
    }
    Ok(())
}

#[test]
fn schema_rejects_an_out_of_contract_filter_value() {
    let mut document =
        serde_json::to_value(CatalogExport::for_view(DashboardView::Today)).unwrap();
    document["sort_filters"][1] = json!({"label": "CLEARED TO TRAIN", "value": "cleared"});
    assert!(validate_export(&document).is_err());
}

#[test]
fn export_round_trips_through_a_file() -> Result<()> {
    let dir = TempDir::new().context("failed to allocate temp dir")?;
    let path = dir.path().join("catalog_today.json");

    let export = CatalogExport::for_view(DashboardView::Today);
    fs::write(&path, serde_json::to_string_pretty(&export)?)?;

    let raw = fs::read_to_string(&path)?;
    let reloaded: CatalogExport = serde_json::from_str(&raw)?;
    assert_eq!(reloaded, export);

    let document: Value = serde_json::from_str(&raw)?;
    validate_export(&document)?;
    Ok(())
}
