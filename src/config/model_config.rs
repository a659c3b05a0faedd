//! Model artifact configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Model environment configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    /// Artifact loaded once at startup
    pub model_path: PathBuf,
    /// Intra-op threads for the ONNX backend
    pub onnx_threads: usize,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("stacking_model.json"),
            onnx_threads: 1,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let onnx_threads = match lookup("ONNX_THREADS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid ONNX_THREADS: {}", raw))?,
            None => defaults.onnx_threads,
        };

        Ok(Self {
            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            onnx_threads,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_defaults() {
        let config = ModelEnvConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.model_path, PathBuf::from("stacking_model.json"));
        assert_eq!(config.onnx_threads, 1);
    }

    #[test]
    fn test_model_config_overrides() {
        let config = ModelEnvConfig::from_lookup(|key| match key {
            "MODEL_PATH" => Some("models/regressor.onnx".to_string()),
            "ONNX_THREADS" => Some(" 4 ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.model_path, PathBuf::from("models/regressor.onnx"));
        assert_eq!(config.onnx_threads, 4);
    }

    #[test]
    fn test_invalid_thread_count_is_an_error() {
        let result =
            ModelEnvConfig::from_lookup(|key| (key == "ONNX_THREADS").then(|| "-1".to_string()));
        assert!(result.is_err());
    }
}
