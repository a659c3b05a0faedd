//! Predict-time pipeline: field renaming, inference, discretization.

use crate::application::ml::predictor::MLPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FieldNameMap;
use crate::domain::ml::thresholds::{SeverityClass, ThresholdSet};
use crate::domain::types::PredictionRequest;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of one successful prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub raw_score: f64,
    pub class: SeverityClass,
}

/// Stateless per request; everything it holds is read-only after startup.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn MLPredictor>,
    field_map: Arc<FieldNameMap>,
    thresholds: ThresholdSet,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn MLPredictor>) -> Self {
        Self {
            predictor,
            field_map: Arc::new(FieldNameMap::model_schema()),
            thresholds: ThresholdSet::STANDARD,
        }
    }

    pub fn with_thresholds(mut self, thresholds: ThresholdSet) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> ThresholdSet {
        self.thresholds
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn model_version(&self) -> &str {
        self.predictor.version()
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictionError> {
        debug!(?request, "Prediction request received");

        let row = self.field_map.apply(&request.to_feature_row());
        let raw_score = self.predictor.predict(&row)?;

        let class = self.thresholds.classify(raw_score).ok_or_else(|| {
            PredictionError::inference(format!(
                "model returned a non-finite score ({}) for {:?}",
                raw_score, row
            ))
        })?;

        info!(
            raw_score,
            prediction = class.as_u8(),
            severity = class.label(),
            "Prediction complete"
        );
        Ok(Prediction { raw_score, class })
    }
}
