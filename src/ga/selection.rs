//! Sorting tours for selection.
//!
//! # Algorithm
//!
//! Repeated adjacent-pair exchange passes (bubble sort) over the first
//! `count` tours until a full pass swaps nothing. In place, no allocation,
//! and stable — equal-cost tours keep their relative order. Selection
//! populations are small, so the O(count²) worst case is acceptable; any
//! comparison sort over the same cost order would be equivalent.

use super::tour::Tour;

/// Sorts the first `count` tours ascending by cost, in place.
///
/// `count` larger than the slice is clamped to its length. The remaining
/// tail is left untouched.
///
/// # Examples
///
/// ```
/// use tsp_tour::models::City;
/// use tsp_tour::ga::{sort_by_cost, Tour};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(2.0, 0.0),
///     City::new(3.0, 0.0),
/// ];
/// let mut tours = vec![
///     Tour::from_order(&cities, vec![0, 2, 1, 3]), // cost 8
///     Tour::from_order(&cities, vec![0, 1, 2, 3]), // cost 6
/// ];
/// sort_by_cost(&mut tours, 2);
/// assert!(tours[0].cost() <= tours[1].cost());
/// ```
pub fn sort_by_cost(tours: &mut [Tour], count: usize) {
    let count = count.min(tours.len());
    if count < 2 {
        return;
    }

    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 0..count - 1 {
            if tours[i].cost() > tours[i + 1].cost() {
                tours.swap(i, i + 1);
                swapped = true;
            }
        }
    }
}
