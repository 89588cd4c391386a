use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which status-category table the dashboard is rendering.
///
/// Tagged form of the UI's `isToday` flag: `Today` is the same-day
/// survey-driven view, `Historical` the chronic/trend view.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Today,
    Historical,
}

impl DashboardView {
    /// Convert the UI flag into the tagged view selector.
    pub fn from_is_today(is_today: bool) -> Self {
        if is_today {
            DashboardView::Today
        } else {
            DashboardView::Historical
        }
    }

    pub fn is_today(self) -> bool {
        matches!(self, DashboardView::Today)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DashboardView::Today => "today",
            DashboardView::Historical => "historical",
        }
    }
}

/// Stable machine-readable token for a status category.
///
/// Known variants keep serialization consistent with the tables shipped here;
/// `Other` preserves forward compatibility with upstream status computation
/// that may introduce new tokens before the dashboard tables catch up.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StatusValue {
    SeekMedEvalToClearForTraining,
    AdaptTrainingToAvoidSymptoms,
    MonitorModifyIfNeeded,
    RecoveryDayRecommended,
    AllGood,
    AtRiskOfTimeLossInjury,
    AtRiskOfOvertraining,
    LowVariabilityInhibitingRecovery,
    AtRiskOfUndertraining,
    Other(String),
}

impl StatusValue {
    pub fn as_str(&self) -> &str {
        match self {
            StatusValue::SeekMedEvalToClearForTraining => "seek_med_eval_to_clear_for_training",
            StatusValue::AdaptTrainingToAvoidSymptoms => "adapt_training_to_avoid_symptoms",
            StatusValue::MonitorModifyIfNeeded => "monitor_modify_if_needed",
            StatusValue::RecoveryDayRecommended => "recovery_day_recommended",
            StatusValue::AllGood => "all_good",
            StatusValue::AtRiskOfTimeLossInjury => "at_risk_of_time_loss_injury",
            StatusValue::AtRiskOfOvertraining => "at_risk_of_overtraining",
            StatusValue::LowVariabilityInhibitingRecovery => "low_variability_inhibiting_recovery",
            StatusValue::AtRiskOfUndertraining => "at_risk_of_undertraining",
            StatusValue::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "seek_med_eval_to_clear_for_training" => StatusValue::SeekMedEvalToClearForTraining,
            "adapt_training_to_avoid_symptoms" => StatusValue::AdaptTrainingToAvoidSymptoms,
            "monitor_modify_if_needed" => StatusValue::MonitorModifyIfNeeded,
            "recovery_day_recommended" => StatusValue::RecoveryDayRecommended,
            "all_good" => StatusValue::AllGood,
            "at_risk_of_time_loss_injury" => StatusValue::AtRiskOfTimeLossInjury,
            "at_risk_of_overtraining" => StatusValue::AtRiskOfOvertraining,
            "low_variability_inhibiting_recovery" => StatusValue::LowVariabilityInhibitingRecovery,
            "at_risk_of_undertraining" => StatusValue::AtRiskOfUndertraining,
            other => StatusValue::Other(other.to_string()),
        }
    }
}

impl Serialize for StatusValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

/// Stable token for a sort-filter option on the athlete list.
///
/// Closed set; the dashboard's filter control only ever offers these three.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    ViewAll,
    ClearedToPlay,
    NotClearedToPlay,
}

impl FilterValue {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterValue::ViewAll => "view_all",
            FilterValue::ClearedToPlay => "cleared_to_play",
            FilterValue::NotClearedToPlay => "not_cleared_to_play",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_value_round_trips_known_and_unknown() {
        let known = StatusValue::RecoveryDayRecommended;
        let json = serde_json::to_string(&known).unwrap();
        assert_eq!(json.trim_matches('"'), "recovery_day_recommended");
        let back: StatusValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, known);

        let custom_json = "\"sprained_ankle_protocol\"";
        let parsed: StatusValue = serde_json::from_str(custom_json).unwrap();
        assert_eq!(
            parsed,
            StatusValue::Other("sprained_ankle_protocol".to_string())
        );
        let serialized = serde_json::to_string(&parsed).unwrap();
        assert_eq!(serialized, custom_json);
    }

    #[test]
    fn filter_value_serializes_snake_case() {
        let json = serde_json::to_string(&FilterValue::NotClearedToPlay).unwrap();
        assert_eq!(json, "\"not_cleared_to_play\"");
        let back: FilterValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FilterValue::NotClearedToPlay);
        assert!(serde_json::from_str::<FilterValue>("\"cleared_to_swim\"").is_err());
    }

    #[test]
    fn view_flag_conversions_agree() {
        assert_eq!(DashboardView::from_is_today(true), DashboardView::Today);
        assert_eq!(
            DashboardView::from_is_today(false),
            DashboardView::Historical
        );
        assert!(DashboardView::Today.is_today());
        assert!(!DashboardView::Historical.is_today());
        assert_eq!(
            serde_json::to_string(&DashboardView::Historical).unwrap(),
            "\"historical\""
        );
    }
}
