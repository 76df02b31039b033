//! Domain model types for the traveling salesman problem.
//!
//! Provides the city abstraction that tours are evaluated against: a point
//! in the plane with a symmetric Euclidean distance.

mod city;

pub use city::City;
