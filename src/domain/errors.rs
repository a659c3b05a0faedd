use std::any::Any;
use thiserror::Error;

/// Errors raised while turning a request into a severity class
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error("Schema mismatch: model expects column '{field}'")]
    SchemaMismatch { field: String },

    #[error("Inference failed: {reason}")]
    InferenceFailure { reason: String },
}

impl PredictionError {
    pub fn unavailable(reason: impl std::fmt::Display) -> Self {
        Self::ModelUnavailable {
            reason: reason.to_string(),
        }
    }

    pub fn inference(reason: impl std::fmt::Display) -> Self {
        Self::InferenceFailure {
            reason: reason.to_string(),
        }
    }

    /// Inference failure carrying the message of a caught panic.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::inference(format!("model panicked: {}", message))
    }

    /// Fatal errors abort startup instead of failing a single request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ModelUnavailable { .. })
    }
}

/// Rejected cut points for a custom `ThresholdSet`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("Cut point {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("Cut points must be strictly increasing: {previous} >= {value} at index {index}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_formatting() {
        let error = PredictionError::SchemaMismatch {
            field: "Basic_Demos-Sex".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("Basic_Demos-Sex"));
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_model_unavailable_is_fatal() {
        let error = PredictionError::unavailable("file not found");

        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "Model unavailable: file not found");
    }

    #[test]
    fn test_panic_payloads_become_inference_failures() {
        let from_str = PredictionError::from_panic(Box::new("Invalid index (0,8) for 1x5 matrix"));
        assert_eq!(
            from_str.to_string(),
            "Inference failed: model panicked: Invalid index (0,8) for 1x5 matrix"
        );

        let from_string = PredictionError::from_panic(Box::new(String::from("boom")));
        assert!(from_string.to_string().ends_with("boom"));

        let opaque = PredictionError::from_panic(Box::new(42_u32));
        assert!(opaque.to_string().contains("unknown panic"));
        assert!(!opaque.is_fatal());
    }

    #[test]
    fn test_threshold_error_formatting() {
        let error = ThresholdError::NotIncreasing {
            index: 1,
            previous: 0.5,
            value: 0.5,
        };
        assert!(error.to_string().contains("strictly increasing"));
    }

    #[test]
    fn test_inference_failure_formatting() {
        let error = PredictionError::inference("empty output");
        assert_eq!(error.to_string(), "Inference failed: empty output");
    }
}
