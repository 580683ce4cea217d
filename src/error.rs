//! Error types for seating searches.
//!
//! Errors fall into two groups:
//!
//! - **Caller-correctable**: [`SeatingError::Validation`],
//!   [`SeatingError::Capacity`] and [`SeatingError::InvalidPreferences`].
//!   These are raised before any search begins and should be reported
//!   to the user verbatim.
//! - **Invariant violations**: [`SeatingError::MissingGuests`],
//!   [`SeatingError::DuplicateGuest`], [`SeatingError::UnknownGuest`] and
//!   [`SeatingError::EmptyPopulation`].
//!   These signal a defect in construction or crossover and abort the
//!   current run. They are never repaired.

use crate::model::GuestId;

/// Errors that can occur while building or searching seating arrangements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatingError {
    /// A search parameter is out of range or inconsistent.
    #[error("invalid parameter: {0}")]
    Validation(String),

    /// The minimum occupancy cannot be met with the required number of tables.
    #[error("cannot seat {guests} guests at {tables} tables with at least {min_per_table} per table")]
    Capacity {
        /// Number of guests to seat.
        guests: usize,
        /// Number of tables required by the maximum capacity.
        tables: usize,
        /// Minimum occupancy per table.
        min_per_table: usize,
    },

    /// The preference table is malformed.
    #[error("invalid preferences: {0}")]
    InvalidPreferences(String),

    /// One or more guests are not seated at any table.
    #[error("arrangement is missing guests: {0:?}")]
    MissingGuests(Vec<GuestId>),

    /// A guest is seated more than once.
    #[error("guest {0:?} is seated more than once")]
    DuplicateGuest(GuestId),

    /// A seated guest does not appear in the preference table.
    #[error("guest {0:?} is not in the preference table")]
    UnknownGuest(GuestId),

    /// A genetic population ended up with no individuals.
    #[error("population is empty")]
    EmptyPopulation,
}

impl SeatingError {
    /// Returns `true` for invariant violations that must abort the run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SeatingError::MissingGuests(_)
                | SeatingError::DuplicateGuest(_)
                | SeatingError::UnknownGuest(_)
                | SeatingError::EmptyPopulation
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeatingError>;
