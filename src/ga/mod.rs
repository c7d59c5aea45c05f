//! Genetic algorithm for geographic route optimization.
//!
//! - [`EvolutionConfig`] — run parameters (generations, population size, seed)
//! - [`population`] — initial population seeding
//! - [`operators`] — crossover and mutation over routes
//! - [`EvolutionEngine`] — selection → breed → replace loop

mod config;
mod engine;
pub mod operators;
pub mod population;

pub use config::EvolutionConfig;
pub use engine::{EvolutionEngine, EvolutionResult, SURVIVOR_DIVISOR};
