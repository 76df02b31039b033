//! Permutation-level mutation operators.
//!
//! These operate on `&[usize]` index permutations and are independent of the
//! city geometry. Each randomized operator draws its cut points from an
//! injected [`Rng`], so results are reproducible under a seeded generator.
//!
//! - [`invert_mutation`]: Reverse a random segment — O(n)
//! - [`splice_mutation`]: Excise a random block and re-splice it at a third
//!   cut point — O(n)
//!
//! The deterministic re-splice core [`splice_block`] and the cut-point
//! sampling helpers [`distinct_pair`] / [`distinct_triple`] are exposed so
//! callers can pin cut points in tests.

use rand::Rng;

/// Inversion mutation: reverse a segment between two distinct random
/// positions.
///
/// Draws `p0 < p1` uniformly from `0..perm.len()`, resampling until the two
/// are distinct, then reverses `perm[p0..=p1]` in place. Reversing a
/// contiguous range cannot introduce duplicates, so a permutation stays a
/// permutation.
///
/// Leaves `perm` unchanged if it has fewer than two elements.
///
/// # Complexity
/// O(n) worst case for segment reversal
pub fn invert_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    if perm.len() < 2 {
        return;
    }
    let (start, end) = distinct_pair(perm.len(), rng);
    perm[start..=end].reverse();
}

/// Three-point re-splice mutation: relocate a random contiguous block.
///
/// Draws three pairwise-distinct cut values from `0..=perm.len()` (the
/// upper bound acts as an exclusive end-of-sequence marker), sorts them
/// ascending, and returns the sequence with the block `[t0, t1]` excised
/// and re-spliced just before the element originally at `t2`. When `t2`
/// equals the length, the block lands at the end.
///
/// Returns a copy of `perm` if it has fewer than two elements.
///
/// # Complexity
/// O(n)
pub fn splice_mutation<R: Rng>(perm: &[usize], rng: &mut R) -> Vec<usize> {
    if perm.len() < 2 {
        return perm.to_vec();
    }
    let (t0, t1, t2) = distinct_triple(perm.len(), rng);
    splice_block(perm, t0, t1, t2)
}

/// Relocates the block `perm[t0..=t1]` so the element originally at `t2`
/// follows it.
///
/// The output is built from four slices of the input:
///
/// ```text
/// perm[..t0] ++ perm[t1+1..t2] ++ perm[t0..=t1] ++ perm[t2..]
/// ```
///
/// `t2` ranges up to and including `perm.len()`, where the length means
/// "end of sequence" and is never used as a direct index. Every valid cut
/// triple therefore yields a full-length permutation.
///
/// # Panics
///
/// Panics unless `t0 < t1 < t2 <= perm.len()`.
///
/// # Examples
///
/// ```
/// use tsp_tour::ga::operators::splice_block;
///
/// let perm = vec![0, 1, 2, 3, 4];
/// assert_eq!(splice_block(&perm, 1, 2, 4), vec![0, 3, 1, 2, 4]);
/// // t2 == len: block moves to the end
/// assert_eq!(splice_block(&perm, 0, 1, 5), vec![2, 3, 4, 0, 1]);
/// ```
pub fn splice_block(perm: &[usize], t0: usize, t1: usize, t2: usize) -> Vec<usize> {
    assert!(
        t0 < t1 && t1 < t2 && t2 <= perm.len(),
        "cut points must satisfy t0 < t1 < t2 <= len"
    );

    let mut out = Vec::with_capacity(perm.len());
    out.extend_from_slice(&perm[..t0]);
    out.extend_from_slice(&perm[t1 + 1..t2]);
    out.extend_from_slice(&perm[t0..=t1]);
    out.extend_from_slice(&perm[t2..]);
    out
}

/// Draws two distinct positions from `0..n`, returned in ascending order.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions for a distinct pair");

    let mut a = 0;
    let mut b = 0;
    while a == b {
        a = rng.random_range(0..n);
        b = rng.random_range(0..n);
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Draws three pairwise-distinct cut values from `0..=n`, returned in
/// ascending order.
///
/// The inclusive upper bound is the end-of-sequence sentinel used by
/// [`splice_block`].
///
/// # Panics
///
/// Panics if `n < 2` (fewer than three candidate values).
pub fn distinct_triple<R: Rng>(n: usize, rng: &mut R) -> (usize, usize, usize) {
    assert!(n >= 2, "need at least three candidate cut values in 0..=n");

    let mut a = 0;
    let mut b = 0;
    let mut c = 0;
    while a == b || a == c || b == c {
        a = rng.random_range(0..=n);
        b = rng.random_range(0..=n);
        c = rng.random_range(0..=n);
    }
    let mut points = [a, b, c];
    points.sort_unstable();
    (points[0], points[1], points[2])
}
