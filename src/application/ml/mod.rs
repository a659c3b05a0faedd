pub mod loader;
pub mod onnx_predictor;
pub mod predictor;
pub mod smartcore_predictor;

pub use loader::{ModelFormat, ModelLoader};
pub use predictor::MLPredictor;
