//! Arrangements and table occupancy bounds.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use super::preferences::{GuestId, PreferenceTable};
use crate::error::{Result, SeatingError};

/// A table is the list of guests seated at it.
///
/// Order is irrelevant for scoring but kept stable for display.
pub type Table = Vec<GuestId>;

/// Allowed occupancy range for every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableBounds {
    /// Minimum guests per table.
    pub min_per_table: usize,

    /// Maximum guests per table.
    pub max_per_table: usize,
}

impl Default for TableBounds {
    fn default() -> Self {
        Self {
            min_per_table: 4,
            max_per_table: 6,
        }
    }
}

impl TableBounds {
    pub fn new(min_per_table: usize, max_per_table: usize) -> Self {
        Self {
            min_per_table,
            max_per_table,
        }
    }

    /// Returns `true` if a table of `size` guests is allowed.
    pub fn contains(&self, size: usize) -> bool {
        (self.min_per_table..=self.max_per_table).contains(&size)
    }

    /// Range of table counts `k` that can seat `guests` people:
    /// `ceil(guests / max) <= k <= floor(guests / min)`.
    ///
    /// Returns `None` when the range is empty or the bounds are invalid.
    pub fn feasible_table_counts(&self, guests: usize) -> Option<RangeInclusive<usize>> {
        if self.validate().is_err() {
            return None;
        }
        let lo = guests.div_ceil(self.max_per_table);
        let hi = guests / self.min_per_table;
        (lo <= hi).then_some(lo..=hi)
    }

    /// Validates the bounds.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.min_per_table == 0 {
            return Err("min_per_table must be a positive integer".into());
        }
        if self.max_per_table == 0 {
            return Err("max_per_table must be a positive integer".into());
        }
        if self.max_per_table < self.min_per_table {
            return Err(format!(
                "max_per_table ({}) must not be less than min_per_table ({})",
                self.max_per_table, self.min_per_table
            ));
        }
        Ok(())
    }
}

/// Splits `guests` as evenly as possible over `tables` tables.
///
/// The first `guests % tables` tables receive one extra seat.
pub fn even_sizes(guests: usize, tables: usize) -> Vec<usize> {
    if tables == 0 {
        return Vec::new();
    }
    let base = guests / tables;
    let extra = guests % tables;
    (0..tables)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// A partition of guests into tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    tables: Vec<Table>,
}

impl Arrangement {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Cuts the flat `guests` sequence into consecutive tables of `sizes`.
    ///
    /// Guests beyond `sizes.iter().sum()` are dropped; callers pass a
    /// size sequence that sums to `guests.len()`.
    pub fn from_sizes(guests: Vec<GuestId>, sizes: &[usize]) -> Self {
        let mut rest = guests.into_iter();
        let tables = sizes
            .iter()
            .map(|&size| rest.by_ref().take(size).collect())
            .collect();
        Self { tables }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub(crate) fn tables_mut(&mut self) -> &mut [Table] {
        &mut self.tables
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }

    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    /// Total number of seated guests.
    pub fn guest_count(&self) -> usize {
        self.tables.iter().map(Vec::len).sum()
    }

    pub fn table_sizes(&self) -> Vec<usize> {
        self.tables.iter().map(Vec::len).collect()
    }

    /// `max(size) - min(size)`, or 0 with no tables.
    pub fn size_spread(&self) -> usize {
        let max = self.tables.iter().map(Vec::len).max().unwrap_or(0);
        let min = self.tables.iter().map(Vec::len).min().unwrap_or(0);
        max - min
    }

    /// Returns `true` if every table lies within `bounds`.
    pub fn respects(&self, bounds: TableBounds) -> bool {
        self.tables.iter().all(|t| bounds.contains(t.len()))
    }

    /// All guests in table order.
    pub fn flatten(&self) -> Vec<GuestId> {
        self.tables.iter().flatten().cloned().collect()
    }

    /// Returns `true` if any guest is seated more than once.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.guest_count());
        !self.tables.iter().flatten().all(|g| seen.insert(g.as_str()))
    }

    /// Checks that every guest in `preferences` is seated exactly once and
    /// no one else is seated.
    pub fn check_complete(&self, preferences: &PreferenceTable) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(preferences.len());
        for guest in self.tables.iter().flatten() {
            if !preferences.contains(guest) {
                return Err(SeatingError::UnknownGuest(guest.clone()));
            }
            if !seen.insert(guest.as_str()) {
                return Err(SeatingError::DuplicateGuest(guest.clone()));
            }
        }
        let missing: Vec<GuestId> = preferences
            .guests()
            .filter(|g| !seen.contains(g.as_str()))
            .cloned()
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SeatingError::MissingGuests(missing))
        }
    }
}

impl From<Vec<Table>> for Arrangement {
    fn from(tables: Vec<Table>) -> Self {
        Self::new(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Preferences;

    fn arrangement(tables: &[&[&str]]) -> Arrangement {
        Arrangement::new(
            tables
                .iter()
                .map(|t| t.iter().map(|g| g.to_string()).collect())
                .collect(),
        )
    }

    fn table_of(names: &[&str]) -> PreferenceTable {
        PreferenceTable::from_entries(names.iter().map(|n| (*n, Preferences::default())))
    }

    #[test]
    fn test_even_sizes() {
        assert_eq!(even_sizes(10, 3), vec![4, 3, 3]);
        assert_eq!(even_sizes(6, 2), vec![3, 3]);
        assert_eq!(even_sizes(5, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_from_sizes() {
        let guests: Vec<GuestId> = ["A", "B", "C", "D", "E"].map(String::from).to_vec();
        let arr = Arrangement::from_sizes(guests, &[3, 2]);
        assert_eq!(arr, arrangement(&[&["A", "B", "C"], &["D", "E"]]));
    }

    #[test]
    fn test_size_spread() {
        let arr = arrangement(&[&["A", "B", "C"], &["D"]]);
        assert_eq!(arr.size_spread(), 2);
        assert_eq!(Arrangement::default().size_spread(), 0);
    }

    #[test]
    fn test_feasible_table_counts() {
        let bounds = TableBounds::new(2, 4);
        assert_eq!(bounds.feasible_table_counts(6), Some(2..=3));
        assert_eq!(TableBounds::new(3, 4).feasible_table_counts(5), None);
        assert_eq!(TableBounds::new(5, 3).feasible_table_counts(10), None);
    }

    #[test]
    fn test_bounds_validate() {
        assert!(TableBounds::new(0, 3).validate().is_err());
        assert!(TableBounds::new(5, 3).validate().is_err());
        assert!(TableBounds::new(3, 3).validate().is_ok());
    }

    #[test]
    fn test_check_complete_ok() {
        let prefs = table_of(&["A", "B", "C"]);
        assert!(arrangement(&[&["A", "C"], &["B"]])
            .check_complete(&prefs)
            .is_ok());
    }

    #[test]
    fn test_check_complete_duplicate() {
        let prefs = table_of(&["A", "B", "C"]);
        let err = arrangement(&[&["A", "B"], &["B", "C"]])
            .check_complete(&prefs)
            .unwrap_err();
        assert_eq!(err, SeatingError::DuplicateGuest("B".into()));
    }

    #[test]
    fn test_check_complete_missing() {
        let prefs = table_of(&["A", "B", "C"]);
        let err = arrangement(&[&["A"], &["B"]])
            .check_complete(&prefs)
            .unwrap_err();
        assert_eq!(err, SeatingError::MissingGuests(vec!["C".into()]));
    }

    #[test]
    fn test_check_complete_unknown() {
        let prefs = table_of(&["A"]);
        let err = arrangement(&[&["A", "Z"]]).check_complete(&prefs).unwrap_err();
        assert_eq!(err, SeatingError::UnknownGuest("Z".into()));
    }

    #[test]
    fn test_has_duplicates() {
        assert!(arrangement(&[&["A"], &["A"]]).has_duplicates());
        assert!(!arrangement(&[&["A"], &["B"]]).has_duplicates());
    }
}
