//! Validity-preserving crossover and mutation for arrangements.
//!
//! # Crossover
//!
//! [`crossover`] walks both parents' tables pairwise by index and emits
//! each guest the first time it is seen, parent1's table before parent2's.
//! Guests never reached are appended, and the resulting sequence is dealt
//! into `parent1.num_tables()` evenly sized tables. The child leans toward
//! parent1's groupings.
//!
//! # Mutation
//!
//! [`mutate`] swaps one guest between two distinct tables, retrying up to
//! [`MUTATION_RETRIES`] times until the result is duplicate-free.

use std::collections::HashSet;

use rand::seq::index::sample;
use rand::Rng;
use tracing::trace;

use crate::error::Result;
use crate::model::{even_sizes, Arrangement, GuestId, PreferenceTable};

/// Attempts made by [`mutate`] before giving up.
pub const MUTATION_RETRIES: usize = 10;

/// Combines two parents into one child.
///
/// # Errors
///
/// Returns an invariant error if the child omits, duplicates or invents a
/// guest. That only happens when a parent is itself invalid.
pub fn crossover(
    parent1: &Arrangement,
    parent2: &Arrangement,
    preferences: &PreferenceTable,
) -> Result<Arrangement> {
    let tables = parent1.num_tables().max(parent2.num_tables());
    let mut used: HashSet<&str> = HashSet::with_capacity(preferences.len());
    let mut flat: Vec<GuestId> = Vec::with_capacity(preferences.len());

    for i in 0..tables {
        let first = parent1.tables().get(i).into_iter().flatten();
        let second = parent2.tables().get(i).into_iter().flatten();
        for guest in first.chain(second) {
            if used.insert(guest.as_str()) {
                flat.push(guest.clone());
            }
        }
    }

    let missing: Vec<GuestId> = preferences
        .guests()
        .filter(|g| !used.contains(g.as_str()))
        .cloned()
        .collect();
    flat.extend(missing);

    let sizes = even_sizes(flat.len(), parent1.num_tables());
    let child = Arrangement::from_sizes(flat, &sizes);
    child.check_complete(preferences)?;
    Ok(child)
}

/// Swaps one guest between two random tables.
///
/// Returns `false`, leaving `individual` unchanged, if no duplicate-free
/// swap was found within [`MUTATION_RETRIES`] attempts.
pub fn mutate<R: Rng>(individual: &mut Arrangement, rng: &mut R) -> bool {
    let n = individual.num_tables();
    if n < 2 {
        trace!("mutation skipped: fewer than two tables");
        return false;
    }

    for _ in 0..MUTATION_RETRIES {
        let picked = sample(rng, n, 2);
        let (a, b) = (picked.index(0), picked.index(1));
        let tables = individual.tables_mut();
        if tables[a].is_empty() || tables[b].is_empty() {
            continue;
        }

        let i = rng.random_range(0..tables[a].len());
        let j = rng.random_range(0..tables[b].len());
        swap_guests(tables, (a, i), (b, j));

        if !individual.has_duplicates() {
            return true;
        }
        swap_guests(individual.tables_mut(), (a, i), (b, j));
    }

    trace!(retries = MUTATION_RETRIES, "mutation skipped: no duplicate-free swap");
    false
}

fn swap_guests(tables: &mut [Vec<GuestId>], (a, i): (usize, usize), (b, j): (usize, usize)) {
    let guest = tables[a][i].clone();
    tables[a][i] = std::mem::replace(&mut tables[b][j], guest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeatingError;
    use crate::model::Preferences;
    use crate::random::create_rng;

    fn arrangement(tables: &[&[&str]]) -> Arrangement {
        Arrangement::new(
            tables
                .iter()
                .map(|t| t.iter().map(|g| g.to_string()).collect())
                .collect(),
        )
    }

    fn guests(names: &[&str]) -> PreferenceTable {
        PreferenceTable::from_entries(names.iter().map(|n| (*n, Preferences::default())))
    }

    #[test]
    fn test_crossover_identical_parents() {
        let prefs = guests(&["A", "B", "C", "D", "E", "F"]);
        let parent = arrangement(&[&["A", "B", "C"], &["D", "E", "F"]]);
        let child = crossover(&parent, &parent, &prefs).unwrap();
        assert_eq!(child, parent);
    }

    #[test]
    fn test_crossover_first_writer_wins() {
        let prefs = guests(&["A", "B", "C", "D", "E", "F"]);
        let p1 = arrangement(&[&["A", "B", "C"], &["D", "E", "F"]]);
        let p2 = arrangement(&[&["F", "A", "E"], &["B", "C", "D"]]);
        let child = crossover(&p1, &p2, &prefs).unwrap();
        // Sequence: A B C F E | D  ->  [A B C] [F E D]
        assert_eq!(child, arrangement(&[&["A", "B", "C"], &["F", "E", "D"]]));
    }

    #[test]
    fn test_crossover_keeps_parent1_table_count() {
        let prefs = guests(&["A", "B", "C", "D", "E", "F", "G"]);
        let p1 = arrangement(&[&["A", "B", "C", "D"], &["E", "F", "G"]]);
        let p2 = arrangement(&[&["G", "A"], &["B", "C"], &["D", "E", "F"]]);
        let child = crossover(&p1, &p2, &prefs).unwrap();
        assert_eq!(child.table_sizes(), vec![4, 3]);
        assert!(child.check_complete(&prefs).is_ok());
    }

    #[test]
    fn test_crossover_appends_missing_guests() {
        let prefs = guests(&["A", "B", "C", "D"]);
        let p1 = arrangement(&[&["A"], &["B"]]);
        let p2 = arrangement(&[&["B"], &["A"]]);
        let child = crossover(&p1, &p2, &prefs).unwrap();
        assert_eq!(child, arrangement(&[&["A", "B"], &["C", "D"]]));
    }

    #[test]
    fn test_crossover_rejects_unknown_guest() {
        let prefs = guests(&["A", "B"]);
        let p1 = arrangement(&[&["A"], &["Z"]]);
        let p2 = arrangement(&[&["A"], &["B"]]);
        let err = crossover(&p1, &p2, &prefs).unwrap_err();
        assert_eq!(err, SeatingError::UnknownGuest("Z".into()));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_mutate_swaps_between_tables() {
        let mut individual = arrangement(&[&["A", "B"], &["C", "D"]]);
        let mut rng = create_rng(Some(42));
        assert!(mutate(&mut individual, &mut rng));
        assert_eq!(individual.table_sizes(), vec![2, 2]);
        assert!(!individual.has_duplicates());
        assert_ne!(individual, arrangement(&[&["A", "B"], &["C", "D"]]));
    }

    #[test]
    fn test_mutate_single_table_is_noop() {
        let mut individual = arrangement(&[&["A", "B", "C"]]);
        let mut rng = create_rng(Some(42));
        assert!(!mutate(&mut individual, &mut rng));
        assert_eq!(individual, arrangement(&[&["A", "B", "C"]]));
    }

    #[test]
    fn test_mutate_gives_up_on_duplicates() {
        // Every swap between the tables keeps "X" seated twice.
        let original = arrangement(&[&["X"], &["X"]]);
        let mut individual = original.clone();
        let mut rng = create_rng(Some(42));
        assert!(!mutate(&mut individual, &mut rng));
        assert_eq!(individual, original);
    }
}
