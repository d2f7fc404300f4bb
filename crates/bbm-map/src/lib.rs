#![deny(unsafe_code)]

//! Range-mapping engine for specimen datasets.
//!
//! Rules live in an insertion-ordered [`RangeStore`] guarded by overlap
//! validation; the matcher resolves each row to the first rule covering its
//! target value, and the unmapped-interval calculator reports which runs of
//! the identifier space no rule covers yet.

pub mod classify;
pub mod matcher;
pub mod overlap;
pub mod repository;
pub mod state;
pub mod store;
pub mod unmapped;

pub use classify::{Comparison, classify, parse_number};
pub use matcher::{process, sort_for_display};
pub use overlap::overlaps;
pub use repository::{RuleFileError, RuleSpec, load_rules, save_rules};
pub use state::MapperState;
pub use store::RangeStore;
pub use unmapped::unmapped_intervals;
