// Domain-specific error types
pub mod errors;

// Model schema, renaming and score discretization
pub mod ml;

// Request / response types
pub mod types;
