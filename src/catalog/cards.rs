//! The literal status-category and sort-filter tables.
//!
//! Copy here is owned by the sports-science team and must match the strings
//! the upstream status computation was calibrated against; do not edit wording
//! without a matching upstream change. That includes the "responces" spelling,
//! which is verbatim from the shipped copy deck.
//!
//! Both tables are ordered most-severe-first. The two status tables share
//! exactly one value, `seek_med_eval_to_clear_for_training`, always in first
//! position; its overlay copy differs per view, so the first record is spelled
//! out in each table rather than factored into a shared constant.

use crate::catalog::identity::{DashboardView, FilterValue, StatusValue};
use crate::catalog::model::{SortFilter, StatusCategory};

/// Every status table has exactly this many records.
pub const CATEGORY_COUNT: usize = 5;

/// Number of options in the sort/filter control.
pub const SORT_FILTER_COUNT: usize = 3;

/// Status categories for one dashboard view, most severe first.
///
/// Returns a freshly built sequence each call; callers may reorder or mutate
/// their copy without affecting later calls.
pub fn status_categories(view: DashboardView) -> Vec<StatusCategory> {
    match view {
        DashboardView::Today => today_categories(),
        DashboardView::Historical => historical_categories(),
    }
}

/// Boolean entry point matching the dashboard's `isToday` flag.
pub fn status_categories_for_today(is_today: bool) -> Vec<StatusCategory> {
    status_categories(DashboardView::from_is_today(is_today))
}

/// The sort/filter options for the athlete list, in display order.
pub fn sort_filters() -> Vec<SortFilter> {
    vec![
        filter("VIEW ALL", FilterValue::ViewAll),
        filter("CLEARED TO TRAIN", FilterValue::ClearedToPlay),
        filter("NOT CLEARED TO TRAIN", FilterValue::NotClearedToPlay),
    ]
}

// Same-day view: guidance for adapting today's training to survey responses.
fn today_categories() -> Vec<StatusCategory> {
    vec![
        with_overlay(
            "SEEK MED EVAL TO CLEAR FOR TRAINING",
            StatusValue::SeekMedEvalToClearForTraining,
            "Significant pain or soreness reported: consult medical staff, consider not training",
            "When an athlete completes a survey, their status will update here.",
        ),
        category(
            "ADAPT TRAINING TO AVOID SYMPTOMS",
            StatusValue::AdaptTrainingToAvoidSymptoms,
            "Modify intensity, movements & drills to prevent severe pain & soreness from worsening",
        ),
        category(
            "MONITOR, MODIFY IF NEEDED",
            StatusValue::MonitorModifyIfNeeded,
            "Modify training if pain increases. Prioritize recovery to prevent development of injury",
        ),
        category(
            "RECOVERY DAY RECOMMENDED",
            StatusValue::RecoveryDayRecommended,
            "Shorten training or limit intensity & to help facilitate recovery from spike in load",
        ),
        category(
            "READY TO TRAIN BASED ON DATA",
            StatusValue::AllGood,
            "Survey responces indicate ready to train as normal if no other medical limitations.",
        ),
    ]
}

// Historical view: risk categorization from load and chronic-issue trends.
fn historical_categories() -> Vec<StatusCategory> {
    vec![
        with_overlay(
            "SEEK MED EVAL TO CLEAR FOR TRAINING",
            StatusValue::SeekMedEvalToClearForTraining,
            "Significant pain or soreness reported: consult medical staff, consider not training",
            "When an athlete has been identified as having a chronic issue, their status will update here.",
        ),
        category(
            "AT RISK OF TIME-LOSS INJURY",
            StatusValue::AtRiskOfTimeLossInjury,
            "Modify intensity, movements & drills to avoid aggravating areas of severe pain & soreness",
        ),
        category(
            "AT RISK OF OVERTRAINING",
            StatusValue::AtRiskOfOvertraining,
            "Consider decreasing workload this week or prioritizing holistic recovery",
        ),
        category(
            "LOW VARIABILITY INHIBITING RECOVERY",
            StatusValue::LowVariabilityInhibitingRecovery,
            "Increase variety in training duration & intensity, prioritize holistic recovery",
        ),
        category(
            "AT RISK OF UNDERTRAINING",
            StatusValue::AtRiskOfUndertraining,
            "Unless tapering, increase load with longer or higher intensity session or supplemental session",
        ),
    ]
}

fn category(label: &str, value: StatusValue, description: &str) -> StatusCategory {
    StatusCategory {
        label: label.to_string(),
        value,
        description: description.to_string(),
        overlay_text: None,
    }
}

fn with_overlay(
    label: &str,
    value: StatusValue,
    description: &str,
    overlay_text: &str,
) -> StatusCategory {
    StatusCategory {
        overlay_text: Some(overlay_text.to_string()),
        ..category(label, value, description)
    }
}

fn filter(label: &str, value: FilterValue) -> SortFilter {
    SortFilter {
        label: label.to_string(),
        value,
    }
}
