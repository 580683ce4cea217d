//! Seating data model.
//!
//! - [`PreferenceTable`]: who each guest wants to sit with or away from
//! - [`Arrangement`]: a complete partition of guests into tables
//! - [`TableBounds`]: the occupancy range every table must respect

mod arrangement;
mod preferences;

pub use arrangement::{even_sizes, Arrangement, Table, TableBounds};
pub use preferences::{GuestId, PreferenceTable, Preferences, MAX_PREFERENCES};
