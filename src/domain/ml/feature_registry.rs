use crate::domain::errors::PredictionError;
use crate::domain::types::FeatureRow;
use std::collections::BTreeMap;

/// Field names accepted on the wire.
pub const REQUEST_FIELDS: [&str; 5] = [
    "SDS_Score_Weighted",
    "Internet_Hours_Age",
    "Physical_Height_Age",
    "Basic_Demos_Sex",
    "PreInt_FGC_CU_PU",
];

/// Column names the model was trained with, in training column order.
/// Vector-input backends rely on this order; any change breaks deployed models.
pub const MODEL_FEATURE_NAMES: [&str; 5] = [
    "SDS_Score_Weighted",
    "Internet_Hours_Age",
    "Physical-Height_Age",
    "Basic_Demos-Sex",
    "PreInt_FGC_CU_PU",
];

/// Wire names that differ from the model schema.
const MODEL_SCHEMA_RENAMES: [(&str, &str); 2] = [
    ("Physical_Height_Age", "Physical-Height_Age"),
    ("Basic_Demos_Sex", "Basic_Demos-Sex"),
];

/// Rename table from request field names to model-schema field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNameMap {
    renames: BTreeMap<String, String>,
}

impl FieldNameMap {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            renames: pairs
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// The table matching `MODEL_FEATURE_NAMES`.
    pub fn model_schema() -> Self {
        Self::new(MODEL_SCHEMA_RENAMES)
    }

    pub fn target(&self, key: &str) -> Option<&str> {
        self.renames.get(key).map(String::as_str)
    }

    /// Rename every key found in the table, pass the rest through untouched.
    ///
    /// If a row carries both a source name and its target, the renamed
    /// source value wins.
    pub fn apply(&self, row: &FeatureRow) -> FeatureRow {
        let mut mapped = FeatureRow::new();
        for (key, value) in row {
            match self.target(key) {
                Some(target) => {
                    mapped.insert(target.to_string(), *value);
                }
                None => {
                    mapped.entry(key.clone()).or_insert(*value);
                }
            }
        }
        mapped
    }
}

impl Default for FieldNameMap {
    fn default() -> Self {
        Self::model_schema()
    }
}

/// Lay a model-schema row out as a vector in `MODEL_FEATURE_NAMES` order.
///
/// Lookup is by name, so the row's own ordering is irrelevant. Extra
/// columns are ignored; a missing one is a schema mismatch.
pub fn features_to_f64_vector(row: &FeatureRow) -> Result<Vec<f64>, PredictionError> {
    MODEL_FEATURE_NAMES
        .iter()
        .map(|name| {
            row.get(*name)
                .copied()
                .ok_or_else(|| PredictionError::SchemaMismatch {
                    field: name.to_string(),
                })
        })
        .collect()
}

/// f32 variant for ONNX inference.
pub fn features_to_vector(row: &FeatureRow) -> Result<Vec<f32>, PredictionError> {
    Ok(features_to_f64_vector(row)?
        .into_iter()
        .map(|v| v as f32)
        .collect())
}
