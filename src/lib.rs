//! # tsp-tour
//!
//! Tour chromosome for genetic-algorithm TSP search: a permutation of city
//! indices with its cached closed-cycle cost, structural mutation operators
//! producing independent offspring, and cost ordering for selection.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City with Euclidean distance)
//! - [`ga`] — Tour chromosome, mutation operators, cost-based sorting
//!
//! Every randomized operation takes an injected [`rand::Rng`], so runs are
//! reproducible under a seeded generator. Driving an evolutionary loop —
//! population handling, recombination, convergence — is left to the caller.

pub mod ga;
pub mod models;
