//! Local search operators for improving a tour.
//!
//! - [`two_opt_improve`] — home-anchored 2-opt edge reversal

mod two_opt;

pub use two_opt::{
    two_opt_improve, TwoOptOutcome, TwoOptSettings, DEFAULT_MAX_PASSES, DEFAULT_TOLERANCE,
};
