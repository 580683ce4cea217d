//! Guest preference table.

use std::collections::BTreeMap;

use crate::error::{Result, SeatingError};

/// Guest identifier.
pub type GuestId = String;

/// Maximum entries in a `prefers` or `avoids` list.
///
/// Matches the `Together1..3` / `Apart1..3` columns of the guest list.
pub const MAX_PREFERENCES: usize = 3;

/// What one guest wants: people to sit with and people to avoid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    /// Guests this guest gains satisfaction from sitting with.
    pub prefers: Vec<GuestId>,

    /// Guests this guest loses satisfaction from sitting with.
    pub avoids: Vec<GuestId>,
}

impl Preferences {
    /// Creates preferences from any string-like lists.
    pub fn new<P, A>(prefers: P, avoids: A) -> Self
    where
        P: IntoIterator,
        P::Item: Into<GuestId>,
        A: IntoIterator,
        A::Item: Into<GuestId>,
    {
        Self {
            prefers: prefers.into_iter().map(Into::into).collect(),
            avoids: avoids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Mapping from guest to preferences.
///
/// Read-only for the duration of a search. Iteration order is sorted by
/// guest name so that seeded runs are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceTable {
    guests: BTreeMap<GuestId, Preferences>,
}

impl PreferenceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(guest, preferences)` pairs.
    ///
    /// Later entries for the same guest replace earlier ones.
    pub fn from_entries<I, G>(entries: I) -> Self
    where
        I: IntoIterator<Item = (G, Preferences)>,
        G: Into<GuestId>,
    {
        Self {
            guests: entries
                .into_iter()
                .map(|(guest, prefs)| (guest.into(), prefs))
                .collect(),
        }
    }

    /// Inserts or replaces a guest's preferences.
    pub fn insert(&mut self, guest: impl Into<GuestId>, preferences: Preferences) {
        self.guests.insert(guest.into(), preferences);
    }

    /// Adds a new guest between runs.
    ///
    /// Fails if the guest already exists or lists itself.
    pub fn add_guest(&mut self, guest: impl Into<GuestId>, preferences: Preferences) -> Result<()> {
        let guest = guest.into();
        if self.guests.contains_key(&guest) {
            return Err(SeatingError::InvalidPreferences(format!(
                "guest {guest:?} already exists"
            )));
        }
        check_entry(&guest, &preferences)?;
        self.guests.insert(guest, preferences);
        Ok(())
    }

    /// Returns the preferences of `guest`, if present.
    pub fn get(&self, guest: &str) -> Option<&Preferences> {
        self.guests.get(guest)
    }

    /// Returns `true` if `guest` is in the table.
    pub fn contains(&self, guest: &str) -> bool {
        self.guests.contains_key(guest)
    }

    /// Guest identifiers in sorted order.
    pub fn guests(&self) -> impl Iterator<Item = &GuestId> {
        self.guests.keys()
    }

    /// `(guest, preferences)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&GuestId, &Preferences)> {
        self.guests.iter()
    }

    /// Number of guests.
    pub fn len(&self) -> usize {
        self.guests.len()
    }

    /// Returns `true` if there are no guests.
    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// Checks that no guest lists itself and no list exceeds
    /// [`MAX_PREFERENCES`] entries.
    ///
    /// Entries naming guests absent from the table are tolerated; they
    /// simply never contribute to the cost.
    pub fn validate(&self) -> Result<()> {
        self.guests
            .iter()
            .try_for_each(|(guest, prefs)| check_entry(guest, prefs))
    }
}

fn check_entry(guest: &str, prefs: &Preferences) -> Result<()> {
    if prefs.prefers.iter().chain(&prefs.avoids).any(|g| g == guest) {
        return Err(SeatingError::InvalidPreferences(format!(
            "guest {guest:?} lists itself"
        )));
    }
    if prefs.prefers.len() > MAX_PREFERENCES || prefs.avoids.len() > MAX_PREFERENCES {
        return Err(SeatingError::InvalidPreferences(format!(
            "guest {guest:?} has more than {MAX_PREFERENCES} entries in a list"
        )));
    }
    Ok(())
}
