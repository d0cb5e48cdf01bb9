//! Simulated analytics.
//!
//! Nothing here analyses the destination: scores are random numbers drawn
//! once per link. The generators sit behind [`ScoreSource`] so the registry
//! can be tested with fixed values.

pub mod scores;

pub use scores::{FixedScores, RandomScores, ScoreSource};
