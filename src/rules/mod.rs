//! Classification rules
//!
//! Each rule covers one aspect of the classification: length tier
//! assignment, dictionary demotion, and the transition signal.

mod demotion;
mod tier;
mod transition;

pub use demotion::dictionary_demotion;
pub use tier::{tier_for_length, MEDIUM_MIN, STRONG_MIN};
pub use transition::crosses_boundary;
