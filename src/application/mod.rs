// Model loading and inference backends
pub mod ml;

// Request orchestration
pub mod prediction_service;
