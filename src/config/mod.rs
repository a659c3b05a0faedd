//! Configuration module for the severity service.
//!
//! Settings come from environment variables (optionally a `.env` file),
//! split by concern: the HTTP listener and the model artifact.

mod model_config;
mod server_config;

pub use model_config::ModelEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Model
    pub model_path: PathBuf,
    pub onnx_threads: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerEnvConfig::from_lookup(&lookup).context("Failed to load server config")?;
        let model = ModelEnvConfig::from_lookup(&lookup).context("Failed to load model config")?;

        Ok(Self {
            bind_address: server.bind_address,
            port: server.port,
            model_path: model.model_path,
            onnx_threads: model.onnx_threads,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .with_context(|| format!("Invalid BIND_ADDRESS: {}", self.bind_address))
    }
}

impl Default for Config {
    fn default() -> Self {
        let server = ServerEnvConfig::default();
        let model = ModelEnvConfig::default();
        Self {
            bind_address: server.bind_address,
            port: server.port,
            model_path: model.model_path,
            onnx_threads: model.onnx_threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 8053);
        assert_eq!(config.model_path, PathBuf::from("stacking_model.json"));
        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:8053".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_bind_address() {
        let config = Config {
            bind_address: "not an address".to_string(),
            ..Config::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_sub_config_errors_propagate() {
        let result = Config::from_lookup(|key| (key == "PORT").then(|| "99999".to_string()));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("server config"));
    }
}
