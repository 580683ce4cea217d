//! Neighbor generation shared by simulated annealing and hill climbing.
//!
//! A neighbor differs from its source by one bounded local change:
//!
//! - **Rebalance**: when table sizes differ by more than one, move a guest
//!   from a largest table to a smallest table.
//! - **Swap**: exchange one guest between two tables (size-preserving).
//! - **Move**: move one guest to another table, if afterwards the source
//!   still holds more than `min_per_table` guests and the destination
//!   fewer than `max_per_table`.
//!
//! Any candidate that leaves a table outside the occupancy bounds is
//! discarded and the source arrangement is returned instead, so callers
//! never need to re-validate the output.

use rand::seq::index::sample;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::trace;

use crate::model::{Arrangement, TableBounds};

/// The change that produced a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborMove {
    /// A guest moved from a largest to a smallest table.
    Rebalance,
    /// Two guests at different tables exchanged seats.
    Swap,
    /// A guest moved to another table.
    Move,
    /// No change was possible; the neighbor equals the source.
    Skipped,
}

/// Returns a neighbor of `arrangement`, leaving the input untouched.
///
/// The result always respects `bounds` when the input does.
pub fn create_neighbor<R: Rng>(
    arrangement: &Arrangement,
    bounds: TableBounds,
    rng: &mut R,
) -> Arrangement {
    create_neighbor_with_move(arrangement, bounds, rng).0
}

/// Like [`create_neighbor`], also reporting which move was applied.
///
/// A candidate rejected by the final bounds check reports
/// [`NeighborMove::Skipped`].
pub fn create_neighbor_with_move<R: Rng>(
    arrangement: &Arrangement,
    bounds: TableBounds,
    rng: &mut R,
) -> (Arrangement, NeighborMove) {
    let mut candidate = arrangement.clone();
    let applied = apply_move(&mut candidate, bounds, rng);

    if applied != NeighborMove::Skipped && !candidate.respects(bounds) {
        trace!(?applied, "neighbor violates table bounds, keeping source");
        return (arrangement.clone(), NeighborMove::Skipped);
    }
    (candidate, applied)
}

fn apply_move<R: Rng>(arrangement: &mut Arrangement, bounds: TableBounds, rng: &mut R) -> NeighborMove {
    let sizes = arrangement.table_sizes();
    if sizes.len() < 2 {
        return NeighborMove::Skipped;
    }

    if arrangement.size_spread() > 1 {
        return rebalance(arrangement, &sizes, rng);
    }

    let picked = sample(rng, sizes.len(), 2);
    let (from, to) = (picked.index(0), picked.index(1));
    let tables = arrangement.tables_mut();

    if rng.random_bool(0.5) {
        if sizes[from] == 0 || sizes[to] == 0 {
            trace!(from, to, "swap skipped: empty table");
            return NeighborMove::Skipped;
        }
        let i = rng.random_range(0..sizes[from]);
        let j = rng.random_range(0..sizes[to]);
        let guest = tables[from][i].clone();
        tables[from][i] = std::mem::replace(&mut tables[to][j], guest);
        NeighborMove::Swap
    } else {
        // After the move the source must stay above min, the destination below max.
        if sizes[from] <= bounds.min_per_table + 1 || sizes[to] + 1 >= bounds.max_per_table {
            trace!(from, to, "move skipped: would break table bounds");
            return NeighborMove::Skipped;
        }
        let i = rng.random_range(0..sizes[from]);
        let guest = tables[from].remove(i);
        tables[to].push(guest);
        NeighborMove::Move
    }
}

fn rebalance<R: Rng>(arrangement: &mut Arrangement, sizes: &[usize], rng: &mut R) -> NeighborMove {
    let largest = sizes.iter().copied().max().unwrap_or(0);
    let smallest = sizes.iter().copied().min().unwrap_or(0);
    let at = |size: usize| -> Vec<usize> {
        sizes
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == size)
            .map(|(i, _)| i)
            .collect()
    };

    let (Some(&from), Some(&to)) = (at(largest).choose(rng), at(smallest).choose(rng)) else {
        return NeighborMove::Skipped;
    };
    if sizes[from] == 0 {
        return NeighborMove::Skipped;
    }

    let tables = arrangement.tables_mut();
    let i = rng.random_range(0..sizes[from]);
    let guest = tables[from].remove(i);
    tables[to].push(guest);
    NeighborMove::Rebalance
}
