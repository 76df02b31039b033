//! Genetic algorithm components for the traveling salesman problem.
//!
//! - [`Tour`] — Permutation chromosome with cached closed-cycle cost
//! - [`operators`] — Permutation-level mutation operators and cut-point sampling
//! - [`sort_by_cost`] — In-place exchange sort of a tour collection prefix

pub mod operators;
mod selection;
mod tour;

pub use selection::sort_by_cost;
pub use tour::{tour_cost, Tour};
