use super::predictor::MLPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::features_to_vector;
use crate::domain::types::FeatureRow;
use ort::session::Session;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

/// Regressor exported to ONNX, run through ONNX Runtime.
///
/// Expects a single `[1, n_features]` f32 input; the first element of the
/// first output is the score.
pub struct OnnxPredictor {
    // `Session::run` needs exclusive access
    session: Mutex<Session>,
}

impl OnnxPredictor {
    pub fn load(model_path: impl Into<PathBuf>, onnx_threads: usize) -> Result<Self, PredictionError> {
        let model_path = model_path.into();

        let builder = Session::builder().map_err(|e| {
            PredictionError::unavailable(format!("failed to create ONNX session builder: {}", e))
        })?;
        let builder = builder
            .with_intra_threads(onnx_threads)
            .map_err(|e| PredictionError::unavailable(format!("invalid ONNX thread count: {}", e)))?;
        let session = builder.commit_from_file(&model_path).map_err(|e| {
            PredictionError::unavailable(format!(
                "failed to load ONNX model from {}: {}",
                model_path.display(),
                e
            ))
        })?;

        info!(
            threads = onnx_threads,
            "Successfully loaded ONNX model from {:?}", model_path
        );
        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl MLPredictor for OnnxPredictor {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PredictionError> {
        let input_vec = features_to_vector(row)?;
        let shape = vec![1, input_vec.len()];

        let input_value = ort::value::Value::from_array((shape.as_slice(), input_vec))
            .map_err(|e| PredictionError::inference(format!("input value creation failed: {}", e)))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| PredictionError::inference(format!("session lock failed: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_value])
            .map_err(PredictionError::inference)?;

        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or_else(|| PredictionError::inference("no output found"))?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(PredictionError::inference)?;

        data.1
            .iter()
            .next()
            .map(|score| *score as f64)
            .ok_or_else(|| PredictionError::inference("empty output"))
    }

    fn name(&self) -> &str {
        "ONNX Runtime Regressor"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
