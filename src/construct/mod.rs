//! Balanced initial arrangements.
//!
//! [`create_balanced_seating`] fixes one table-size sequence that splits
//! the guests as evenly as the occupancy bounds allow, deals a random
//! shuffle into it, then keeps the best of many random re-deals under the
//! same sizes. Table sizes never change after the first deal, so the
//! result is balanced by construction.

mod balanced;
mod config;

pub use balanced::{create_balanced_seating, plan_table_sizes};
pub use config::ConstructConfig;
