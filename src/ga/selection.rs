//! Tournament parent selection.
//!
//! A tournament draws `k` distinct individuals uniformly at random; the
//! two cheapest become the parents. Ties are broken by draw order.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::index::sample;
use rand::Rng;

/// Picks two parent indices from a population with the given `costs`.
///
/// The tournament size is capped at the population size. With a single
/// individual both parents are the same index.
///
/// # Panics
/// Panics if `costs` is empty.
pub fn tournament_pair<R: Rng>(costs: &[f64], k: usize, rng: &mut R) -> (usize, usize) {
    assert!(!costs.is_empty(), "cannot select from empty population");

    let k = k.clamp(1, costs.len());
    let mut drawn = sample(rng, costs.len(), k).into_vec();
    // Stable sort keeps draw order among equal costs.
    drawn.sort_by(|&a, &b| {
        costs[a]
            .partial_cmp(&costs[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let first = drawn[0];
    let second = drawn.get(1).copied().unwrap_or(first);
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_full_tournament_picks_two_best() {
        let costs = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(Some(42));
        for _ in 0..100 {
            assert_eq!(tournament_pair(&costs, 4, &mut rng), (2, 1));
        }
    }

    #[test]
    fn test_tournament_capped_at_population() {
        let costs = [3.0, 2.0];
        let mut rng = create_rng(Some(1));
        assert_eq!(tournament_pair(&costs, 10, &mut rng), (1, 0));
    }

    #[test]
    fn test_parents_are_distinct() {
        let costs = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let mut rng = create_rng(Some(3));
        for _ in 0..200 {
            let (a, b) = tournament_pair(&costs, 3, &mut rng);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(Some(5));
        assert_eq!(tournament_pair(&[7.0], 10, &mut rng), (0, 0));
    }

    #[test]
    fn test_small_tournament_reaches_everyone() {
        let costs = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(Some(42));
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let (a, _) = tournament_pair(&costs, 2, &mut rng);
            counts[a] += 1;
        }
        // Index 0 is never the cheaper of two distinct draws.
        assert_eq!(counts[0], 0);
        assert!(counts[2] > counts[1] && counts[1] > counts[3]);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(Some(42));
        tournament_pair(&[], 3, &mut rng);
    }
}
