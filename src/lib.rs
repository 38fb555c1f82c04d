use shadow_rs::shadow;

shadow!(build);

// Weights and graphs
// ------------------
pub mod float_weight;
pub mod graph;
pub mod weight;

// Algorithms
// ----------
pub mod algorithms;
