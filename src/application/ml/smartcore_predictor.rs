use super::predictor::MLPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::features_to_f64_vector;
use crate::domain::types::FeatureRow;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::info;

pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Random forest regressor serialized as JSON by smartcore.
pub struct SmartCorePredictor {
    model: ForestModel,
}

impl SmartCorePredictor {
    pub fn load(model_path: impl Into<PathBuf>) -> Result<Self, PredictionError> {
        let model_path = model_path.into();

        let file = File::open(&model_path).map_err(|e| {
            PredictionError::unavailable(format!(
                "failed to open model file {}: {}",
                model_path.display(),
                e
            ))
        })?;

        let model: ForestModel = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            PredictionError::unavailable(format!("failed to deserialize ML model: {}", e))
        })?;

        info!("Successfully loaded ML model from {:?}", model_path);
        Ok(Self { model })
    }
}

impl MLPredictor for SmartCorePredictor {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PredictionError> {
        let input_vec = features_to_f64_vector(row)?;
        let input_matrix = DenseMatrix::from_2d_vec(&vec![input_vec])
            .map_err(|e| PredictionError::inference(format!("matrix creation failed: {}", e)))?;

        // smartcore panics on out-of-range column access, which is what an
        // artifact fitted on a different column count hits.
        let predictions = panic::catch_unwind(AssertUnwindSafe(|| self.model.predict(&input_matrix)))
            .map_err(PredictionError::from_panic)?
            .map_err(|e| PredictionError::inference(format!("prediction failed: {}", e)))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::inference("no prediction returned"))
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
