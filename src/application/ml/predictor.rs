use crate::domain::errors::PredictionError;
use crate::domain::types::FeatureRow;

/// Interface for the loaded regression model.
///
/// Implementations are immutable once loaded and shared across requests.
pub trait MLPredictor: Send + Sync {
    /// Score a single row keyed by model-schema column names.
    fn predict(&self, row: &FeatureRow) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
