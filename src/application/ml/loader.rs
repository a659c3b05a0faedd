//! Model artifact loader

use super::onnx_predictor::OnnxPredictor;
use super::predictor::MLPredictor;
use super::smartcore_predictor::SmartCorePredictor;
use crate::domain::errors::PredictionError;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// On-disk format of a model artifact, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// smartcore random forest serialized with serde_json
    SmartCoreJson,
    Onnx,
}

impl ModelFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("onnx") => ModelFormat::Onnx,
            _ => ModelFormat::SmartCoreJson,
        }
    }
}

/// Loads the model once at startup into a shared read-only handle.
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    onnx_threads: usize,
}

impl ModelLoader {
    pub fn new(onnx_threads: usize) -> Self {
        Self {
            onnx_threads: onnx_threads.max(1),
        }
    }

    /// Load the artifact at `path`. Any failure is `ModelUnavailable`.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Arc<dyn MLPredictor>, PredictionError> {
        let path = path.as_ref();
        let format = ModelFormat::from_path(path);

        if !path.exists() {
            return Err(PredictionError::unavailable(format!(
                "model file not found at {}",
                path.display()
            )));
        }

        info!(path = %path.display(), format = ?format, "Loading model");

        let predictor: Arc<dyn MLPredictor> = match format {
            ModelFormat::SmartCoreJson => Arc::new(SmartCorePredictor::load(path)?),
            ModelFormat::Onnx => Arc::new(OnnxPredictor::load(path, self.onnx_threads)?),
        };

        info!(
            model = predictor.name(),
            version = predictor.version(),
            "Model loaded successfully"
        );
        Ok(predictor)
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self { onnx_threads: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ModelFormat::from_path(&PathBuf::from("models/regressor.onnx")),
            ModelFormat::Onnx
        );
        assert_eq!(
            ModelFormat::from_path(&PathBuf::from("MODEL.ONNX")),
            ModelFormat::Onnx
        );
        assert_eq!(
            ModelFormat::from_path(&PathBuf::from("stacking_model.json")),
            ModelFormat::SmartCoreJson
        );
        assert_eq!(
            ModelFormat::from_path(&PathBuf::from("model.bin")),
            ModelFormat::SmartCoreJson
        );
    }

    #[test]
    fn test_missing_file_is_model_unavailable() {
        let loader = ModelLoader::default();
        let err = loader.load("non_existent_model.json").err().unwrap();

        assert!(err.is_fatal());
        assert!(err.to_string().contains("non_existent_model.json"));
    }

    #[test]
    fn test_missing_onnx_file_is_model_unavailable() {
        let err = ModelLoader::new(2).load("non_existent.onnx").err().unwrap();
        assert!(matches!(err, PredictionError::ModelUnavailable { .. }));
    }

    #[test]
    fn test_thread_count_is_at_least_one() {
        assert_eq!(ModelLoader::new(0).onnx_threads, 1);
    }
}
