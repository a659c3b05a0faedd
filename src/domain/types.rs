use crate::domain::ml::thresholds::SeverityClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single-row tabular input, keyed by column name.
pub type FeatureRow = BTreeMap<String, f64>;

/// Body of `POST /api/predict`.
///
/// Every field is optional on the wire and falls back to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionRequest {
    /// Weighted severity-dimension screening score
    #[serde(rename = "SDS_Score_Weighted")]
    pub sds_score_weighted: f64,
    /// Daily internet hours divided by age
    #[serde(rename = "Internet_Hours_Age")]
    pub internet_hours_age: f64,
    /// Height divided by age
    #[serde(rename = "Physical_Height_Age")]
    pub physical_height_age: f64,
    /// 0 = male, 1 = female
    #[serde(rename = "Basic_Demos_Sex")]
    pub basic_demos_sex: f64,
    /// Fitness-gram curl-up / push-up count
    #[serde(rename = "PreInt_FGC_CU_PU")]
    pub preint_fgc_cu_pu: f64,
}

impl PredictionRequest {
    /// Smoke-test subject used for warm-up and as the CLI default.
    pub fn sample() -> Self {
        Self {
            sds_score_weighted: 13.850357,
            internet_hours_age: 15.0,
            physical_height_age: 584.2,
            basic_demos_sex: 0.0,
            preint_fgc_cu_pu: 0.0,
        }
    }

    /// Row keyed by the request (wire) field names.
    pub fn to_feature_row(&self) -> FeatureRow {
        use crate::domain::ml::feature_registry::REQUEST_FIELDS;

        let values = [
            self.sds_score_weighted,
            self.internet_hours_age,
            self.physical_height_age,
            self.basic_demos_sex,
            self.preint_fgc_cu_pu,
        ];

        REQUEST_FIELDS
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}

/// Successful response of `POST /api/predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub success: bool,
    pub prediction: SeverityClass,
}

impl PredictionResult {
    pub fn success(prediction: SeverityClass) -> Self {
        Self {
            success: true,
            prediction,
        }
    }
}
