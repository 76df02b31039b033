//! Tour chromosome for TSP genetic algorithms.
//!
//! A tour encodes one candidate solution as a permutation of city indices
//! together with its cached closed-cycle travel cost. Mutation operators
//! never modify the parent; they return an independent offspring tour with
//! a freshly computed cost.

use std::cmp::Ordering;

use rand::Rng;

use crate::models::City;

use super::operators::{invert_mutation, splice_mutation};

/// A tour: a permutation of city indices with its cached travel cost.
///
/// The order always holds every index in `0..n` exactly once, where `n` is
/// the number of cities the tour was built against. The cost is the total
/// distance of visiting the cities in order and returning to the start.
///
/// Both constructors compute the cost immediately. The in-place mutators
/// [`set_city`](Tour::set_city) and [`set_order`](Tour::set_order) do *not*
/// re-evaluate it; callers must follow them with
/// [`recompute_cost`](Tour::recompute_cost) before reading
/// [`cost`](Tour::cost) again.
///
/// # Examples
///
/// ```
/// use tsp_tour::models::City;
/// use tsp_tour::ga::Tour;
///
/// // Unit square, visited corner by corner.
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// let tour = Tour::from_order(&cities, vec![0, 1, 2, 3]);
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour visiting the cities in uniformly random order.
    ///
    /// Starts from the identity permutation and applies a Fisher-Yates
    /// shuffle, so every permutation is equally likely. An empty city
    /// slice yields the empty tour with cost 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use tsp_tour::models::City;
    /// use tsp_tour::ga::Tour;
    ///
    /// let cities: Vec<City> = (0..5).map(|i| City::new(i as f64, 0.0)).collect();
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let tour = Tour::random(&cities, &mut rng);
    ///
    /// let mut sorted = tour.order().to_vec();
    /// sorted.sort();
    /// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn random<R: Rng>(cities: &[City], rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..cities.len()).collect();

        // Fisher-Yates shuffle
        for i in (1..order.len()).rev() {
            let j = rng.random_range(0..=i);
            order.swap(i, j);
        }

        Self::from_order(cities, order)
    }

    /// Creates a tour from an explicit visiting order and computes its cost.
    ///
    /// The order must be a permutation of `0..cities.len()`. This is not
    /// validated: an order with duplicates or omissions silently produces a
    /// meaningless cost, and indices outside the city slice panic during
    /// cost evaluation.
    pub fn from_order(cities: &[City], order: Vec<usize>) -> Self {
        let cost = tour_cost(cities, &order);
        Self { order, cost }
    }

    /// Cached travel cost of this tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The city visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of cities in this tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the city index at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn city(&self, position: usize) -> usize {
        self.order[position]
    }

    /// Overwrites the city index at the given position.
    ///
    /// The cached cost becomes stale; call
    /// [`recompute_cost`](Tour::recompute_cost) before reading it. The
    /// caller is also responsible for keeping the order a permutation.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn set_city(&mut self, position: usize, city: usize) {
        self.order[position] = city;
    }

    /// Replaces the whole visiting order.
    ///
    /// The cached cost becomes stale; call
    /// [`recompute_cost`](Tour::recompute_cost) before reading it.
    ///
    /// # Panics
    ///
    /// Panics if the new order's length differs from the tour's.
    pub fn set_order(&mut self, order: &[usize]) {
        assert_eq!(
            order.len(),
            self.order.len(),
            "replacement order must keep the tour length"
        );
        self.order.copy_from_slice(order);
    }

    /// Re-evaluates the cached cost against the given cities.
    pub fn recompute_cost(&mut self, cities: &[City]) {
        self.cost = tour_cost(cities, &self.order);
    }

    /// Produces an offspring by reversing a random contiguous segment.
    ///
    /// The segment endpoints are two distinct positions drawn from the
    /// injected generator. The parent is untouched; the offspring's cost is
    /// computed on construction. A tour with fewer than two cities has no
    /// distinct endpoints and returns an equal tour.
    pub fn mutate_inversion<R: Rng>(&self, cities: &[City], rng: &mut R) -> Tour {
        let mut order = self.order.clone();
        invert_mutation(&mut order, rng);
        Tour::from_order(cities, order)
    }

    /// Produces an offspring by excising a random block and re-splicing it
    /// at a third cut point.
    ///
    /// Cut points are drawn from the injected generator; see
    /// [`splice_mutation`](super::operators::splice_mutation) for the exact
    /// block move. The parent is untouched; the offspring's cost is
    /// computed on construction. A tour with fewer than two cities returns
    /// an equal tour.
    pub fn mutate_three_point<R: Rng>(&self, cities: &[City], rng: &mut R) -> Tour {
        let order = splice_mutation(&self.order, rng);
        Tour::from_order(cities, order)
    }

    /// Compares two tours by cost: the cheaper tour orders first.
    ///
    /// Tours of equal cost compare equal regardless of their orders, so
    /// this is a total order on cost, not on identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use tsp_tour::models::City;
    /// use tsp_tour::ga::Tour;
    ///
    /// let cities = vec![City::new(0.0, 0.0), City::new(1.0, 0.0)];
    /// let a = Tour::from_order(&cities, vec![0, 1]);
    /// let b = Tour::from_order(&cities, vec![1, 0]);
    /// assert_eq!(a.cmp_cost(&b), Ordering::Equal);
    /// ```
    pub fn cmp_cost(&self, other: &Tour) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

/// Computes the closed-cycle cost of visiting `cities` in the given order.
///
/// Sums the distance between each pair of consecutive cities, plus the
/// closing edge from the last city back to the first. Empty and
/// single-city orders cost 0.
///
/// # Panics
///
/// Panics if the order contains an index outside `0..cities.len()`.
pub fn tour_cost(cities: &[City], order: &[usize]) -> f64 {
    if order.is_empty() {
        return 0.0;
    }
    let mut cost = 0.0;
    for w in order.windows(2) {
        cost += cities[w[0]].distance_to(&cities[w[1]]);
    }
    cost + cities[order[order.len() - 1]].distance_to(&cities[order[0]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_square() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 1.0),
            City::new(0.0, 1.0),
        ]
    }

    fn line_cities(n: usize) -> Vec<City> {
        (0..n).map(|i| City::new(i as f64, 0.0)).collect()
    }

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort();
        sorted == (0..n).collect::<Vec<usize>>()
    }

    #[test]
    fn test_unit_square_cost() {
        let tour = Tour::from_order(&unit_square(), vec![0, 1, 2, 3]);
        assert!((tour.cost() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_matches_hand_sum() {
        let cities = line_cities(4);
        // 0→2→1→3 = 2 + 1 + 2, closing 3→0 = 3
        let cost = tour_cost(&cities, &[0, 2, 1, 3]);
        assert!((cost - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_degenerate_sizes() {
        let cities = line_cities(3);
        assert_eq!(tour_cost(&cities, &[]), 0.0);
        assert_eq!(tour_cost(&cities, &[1]), 0.0);
        // Two cities: there and back again.
        assert!((tour_cost(&cities, &[0, 2]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_symmetric_under_reversal() {
        let cities = unit_square();
        let forward = Tour::from_order(&cities, vec![0, 2, 1, 3]);
        let backward = Tour::from_order(&cities, vec![3, 1, 2, 0]);
        assert!((forward.cost() - backward.cost()).abs() < 1e-10);
    }

    #[test]
    fn test_random_is_permutation() {
        let cities = line_cities(12);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let tour = Tour::random(&cities, &mut rng);
            assert!(is_permutation(tour.order(), 12));
        }
    }

    #[test]
    fn test_random_deterministic_under_seed() {
        let cities = line_cities(10);
        let a = Tour::random(&cities, &mut StdRng::seed_from_u64(7));
        let b = Tour::random(&cities, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.order(), b.order());
        assert_eq!(a.cost(), b.cost());
    }

    #[test]
    fn test_random_empty() {
        let tour = Tour::random(&[], &mut StdRng::seed_from_u64(42));
        assert!(tour.is_empty());
        assert_eq!(tour.cost(), 0.0);
    }

    #[test]
    fn test_accessors() {
        let cities = line_cities(4);
        let tour = Tour::from_order(&cities, vec![2, 0, 3, 1]);
        assert_eq!(tour.len(), 4);
        assert!(!tour.is_empty());
        assert_eq!(tour.city(0), 2);
        assert_eq!(tour.city(3), 1);
    }

    #[test]
    #[should_panic]
    fn test_city_out_of_range() {
        let cities = line_cities(3);
        let tour = Tour::from_order(&cities, vec![0, 1, 2]);
        tour.city(3);
    }

    #[test]
    fn test_set_city_then_recompute() {
        let cities = line_cities(4);
        let mut tour = Tour::from_order(&cities, vec![0, 1, 2, 3]);
        assert!((tour.cost() - 6.0).abs() < 1e-10);

        // Swap the cities at positions 1 and 2 by hand: [0, 2, 1, 3].
        tour.set_city(1, 2);
        tour.set_city(2, 1);
        // The cached cost is stale until recomputed.
        assert!((tour.cost() - 6.0).abs() < 1e-10);

        tour.recompute_cost(&cities);
        assert!((tour.cost() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_set_order_then_recompute() {
        let cities = line_cities(4);
        let mut tour = Tour::from_order(&cities, vec![0, 1, 2, 3]);
        tour.set_order(&[0, 2, 1, 3]);
        tour.recompute_cost(&cities);
        assert!((tour.cost() - 8.0).abs() < 1e-10);
    }

    #[test]
    #[should_panic(expected = "tour length")]
    fn test_set_order_wrong_length() {
        let cities = line_cities(3);
        let mut tour = Tour::from_order(&cities, vec![0, 1, 2]);
        tour.set_order(&[0, 1]);
    }

    #[test]
    fn test_mutate_inversion_offspring() {
        let cities = line_cities(8);
        let mut rng = StdRng::seed_from_u64(42);
        let parent = Tour::random(&cities, &mut rng);
        let parent_order = parent.order().to_vec();

        for _ in 0..50 {
            let child = parent.mutate_inversion(&cities, &mut rng);
            assert!(is_permutation(child.order(), 8));
            assert!((child.cost() - tour_cost(&cities, child.order())).abs() < 1e-10);
        }
        assert_eq!(parent.order(), parent_order.as_slice());
    }

    #[test]
    fn test_mutate_three_point_offspring() {
        let cities = line_cities(8);
        let mut rng = StdRng::seed_from_u64(42);
        let parent = Tour::random(&cities, &mut rng);
        let parent_order = parent.order().to_vec();

        for _ in 0..50 {
            let child = parent.mutate_three_point(&cities, &mut rng);
            assert!(is_permutation(child.order(), 8));
            assert!((child.cost() - tour_cost(&cities, child.order())).abs() < 1e-10);
        }
        assert_eq!(parent.order(), parent_order.as_slice());
    }

    #[test]
    fn test_mutate_single_city_noop() {
        let cities = line_cities(1);
        let mut rng = StdRng::seed_from_u64(42);
        let parent = Tour::from_order(&cities, vec![0]);

        let a = parent.mutate_inversion(&cities, &mut rng);
        let b = parent.mutate_three_point(&cities, &mut rng);
        assert_eq!(a.order(), &[0]);
        assert_eq!(b.order(), &[0]);
        assert_eq!(a.cost(), 0.0);
        assert_eq!(b.cost(), 0.0);
    }

    #[test]
    fn test_mutation_deterministic_under_seed() {
        let cities = line_cities(9);
        let parent = Tour::from_order(&cities, (0..9).collect());

        let a = parent.mutate_inversion(&cities, &mut StdRng::seed_from_u64(3));
        let b = parent.mutate_inversion(&cities, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.order(), b.order());

        let c = parent.mutate_three_point(&cities, &mut StdRng::seed_from_u64(3));
        let d = parent.mutate_three_point(&cities, &mut StdRng::seed_from_u64(3));
        assert_eq!(c.order(), d.order());
    }

    #[test]
    fn test_cmp_cost() {
        let cities = line_cities(4);
        let cheap = Tour::from_order(&cities, vec![0, 1, 2, 3]); // 6.0
        let dear = Tour::from_order(&cities, vec![0, 2, 1, 3]); // 8.0
        assert_eq!(cheap.cmp_cost(&dear), Ordering::Less);
        assert_eq!(dear.cmp_cost(&cheap), Ordering::Greater);
        assert_eq!(cheap.cmp_cost(&cheap.clone()), Ordering::Equal);
    }
}
