//! Low-level operator scanning for Puffs.
//!
//! Turns the punctuation or operator starting at a cursor into a built-in
//! [`Id`](puffs_token::Id), consuming the longest matching spelling. Letters,
//! digits, quotes and whitespace are not handled here: [`classify`] returns
//! `None` and the caller falls through to its identifier, number or string
//! recognizers.

mod squiggle;

pub use squiggle::{classify, is_squiggle_start, scan_squiggle, Squiggle};
