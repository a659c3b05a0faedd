// Model schema and field renaming
pub mod feature_registry;

// Score discretization
pub mod thresholds;
