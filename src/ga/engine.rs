//! Evolutionary loop execution.
//!
//! [`EvolutionEngine`] orchestrates the complete process:
//! seeding → scoring → truncation selection → crossover → mutation → replace.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use super::config::EvolutionConfig;
use super::operators::{cut_crossover, swap_mutation};
use super::population;
use crate::evaluation::{path_length, route_length};
use crate::models::{Coordinate, Route};
use crate::random::create_rng;

/// Survivor and offspring counts per generation are both
/// `population_size / SURVIVOR_DIVISOR` (integer division).
///
/// With an odd population size the population settles one below the nominal
/// target after the first replacement and stays there. The shrink is
/// tolerated; the alternative of rounding children up would change which
/// routes a seeded run produces.
pub const SURVIVOR_DIVISOR: usize = 2;

/// Result of an optimization run.
///
/// Contains the best route found along with per-run statistics.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The best route discovered during the run.
    pub best: Route,

    /// Open-path length of `best` in meters.
    pub best_length: f64,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best route length in the population at each executed generation.
    ///
    /// Non-increasing: truncation survivors carry the current best into
    /// every following generation.
    pub length_history: Vec<f64>,
}

/// Evolves route permutations toward a shorter open path.
///
/// Selection is truncation: each generation is ranked by
/// [`route_length`](crate::evaluation::route_length) and the top half
/// survives. Parents are then drawn uniformly with replacement from the
/// survivors, and each child passes through
/// [`cut_crossover`](super::operators::cut_crossover) and
/// [`swap_mutation`](super::operators::swap_mutation). The loop always runs
/// the configured number of generations — there is no early-convergence stop.
///
/// The engine holds no state across calls; concurrent callers need only
/// their own point slices.
///
/// # Examples
///
/// ```
/// use u_georoute::ga::{EvolutionConfig, EvolutionEngine};
/// use u_georoute::models::Coordinate;
///
/// let points = vec![
///     Coordinate::new("a", 0.0, 0.0).unwrap(),
///     Coordinate::new("b", 0.0, 1.0).unwrap(),
///     Coordinate::new("c", 1.0, 1.0).unwrap(),
/// ];
/// let engine = EvolutionEngine::new(
///     EvolutionConfig::default()
///         .with_generations(20)
///         .with_population_size(10)
///         .with_seed(42),
/// );
/// let route = engine.optimize(&points);
/// assert!(route.is_permutation_of(&points));
/// ```
pub struct EvolutionEngine {
    config: EvolutionConfig,
}

impl EvolutionEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this engine runs with.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Optimizes the visiting order of `points` and returns the best route.
    ///
    /// Convenience wrapper over [`run`](Self::run).
    pub fn optimize(&self, points: &[Coordinate]) -> Route {
        self.run(points).best
    }

    /// Runs the evolutionary loop and returns the full result.
    ///
    /// An empty `points` slice yields an empty route without error.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`EvolutionConfig::validate`] first to get a descriptive error).
    pub fn run(&self, points: &[Coordinate]) -> EvolutionResult {
        self.run_with_cancel(points, None)
    }

    /// Runs the evolutionary loop with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag becomes `true`, the loop stops at
    /// the next generation boundary and returns the best route found so far.
    pub fn run_with_cancel(
        &self,
        points: &[Coordinate],
        cancel: Option<Arc<AtomicBool>>,
    ) -> EvolutionResult {
        self.config.validate().expect("invalid EvolutionConfig");

        if points.is_empty() {
            return EvolutionResult {
                best: Route::empty(),
                best_length: 0.0,
                generations: 0,
                cancelled: false,
                length_history: Vec::new(),
            };
        }

        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population = population::initialize(points, self.config.population_size, &mut rng);
        if population.is_empty() {
            // Defensive fallback: callers always get a route, never a panic.
            return EvolutionResult {
                best_length: path_length(points),
                best: Route::new(points.to_vec()),
                generations: 0,
                cancelled: false,
                length_history: Vec::new(),
            };
        }

        let survivor_count = self.config.population_size / SURVIVOR_DIVISOR;
        let mut length_history = Vec::with_capacity(self.config.generations);
        let mut cancelled = false;
        let mut completed = 0usize;

        for _ in 0..self.config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Select: rank by length ascending, keep the top half.
            // Scores live only in this scoped ranking; routes never carry them.
            let mut scored: Vec<(f64, Route)> = population
                .drain(..)
                .map(|route| (route_length(&route), route))
                .collect();
            scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
            scored.truncate(survivor_count);

            length_history.push(scored[0].0);

            // Breed: parents drawn uniformly with replacement from survivors
            let mut children = Vec::with_capacity(survivor_count);
            while children.len() < survivor_count {
                let parent_a = &scored[rng.random_range(0..scored.len())].1;
                let parent_b = &scored[rng.random_range(0..scored.len())].1;
                let child = cut_crossover(parent_a, parent_b, &mut rng);
                children.push(swap_mutation(&child, &mut rng));
            }

            // Replace: survivors plus offspring form the next generation
            population = scored.into_iter().map(|(_, route)| route).collect();
            population.extend(children);
            completed += 1;
        }

        let (best_length, best) = population
            .into_iter()
            .map(|route| (route_length(&route), route))
            .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
            .expect("population is non-empty");

        EvolutionResult {
            best,
            best_length,
            generations: completed,
            cancelled,
            length_history,
        }
    }
}
