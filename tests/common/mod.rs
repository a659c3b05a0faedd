#![allow(dead_code)]

use piu_severity::application::ml::MLPredictor;
use piu_severity::domain::errors::PredictionError;
use piu_severity::domain::ml::feature_registry::features_to_f64_vector;
use piu_severity::domain::types::FeatureRow;

/// Returns the same score for every row, but still insists on the model schema.
pub struct FixedScorePredictor {
    pub score: f64,
}

impl MLPredictor for FixedScorePredictor {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PredictionError> {
        features_to_f64_vector(row)?;
        Ok(self.score)
    }

    fn name(&self) -> &str {
        "fixed-score stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Fails every inference call.
pub struct FailingPredictor;

impl MLPredictor for FailingPredictor {
    fn predict(&self, _row: &FeatureRow) -> Result<f64, PredictionError> {
        Err(PredictionError::inference("stub model exploded"))
    }

    fn name(&self) -> &str {
        "failing stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Requires a column the mapped request never carries.
pub struct ExtraColumnPredictor;

impl MLPredictor for ExtraColumnPredictor {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PredictionError> {
        row.get("PAQ_A-PAQ_A_Total")
            .copied()
            .ok_or_else(|| PredictionError::SchemaMismatch {
                field: "PAQ_A-PAQ_A_Total".to_string(),
            })
    }

    fn name(&self) -> &str {
        "extra-column stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Linear stand-in for a fitted regressor: score = SDS / 10.
pub struct LinearPredictor;

impl MLPredictor for LinearPredictor {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PredictionError> {
        let features = features_to_f64_vector(row)?;
        Ok(features[0] / 10.0)
    }

    fn name(&self) -> &str {
        "linear stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Panics inside inference instead of returning an error.
pub struct PanickingPredictor;

impl MLPredictor for PanickingPredictor {
    fn predict(&self, _row: &FeatureRow) -> Result<f64, PredictionError> {
        panic!("index out of bounds: the len is 5 but the index is 8")
    }

    fn name(&self) -> &str {
        "panicking stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}
