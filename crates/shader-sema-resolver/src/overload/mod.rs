//! Overload resolution for intrinsic calls.
//!
//! ## Algorithm
//!
//! 1. Score every overload of the intrinsic against the arguments
//!    (`score`). Unification binds template types and numbers left to
//!    right; constraints are checked once all arguments are seen.
//! 2. If no overload scores zero, the candidates sorted by score feed the
//!    diagnostic.
//! 3. Otherwise the fully matching overloads are ranked (`ranking`) and
//!    the winner is instantiated by the table.

mod matcher;
mod ranking;
mod score;

pub(crate) use matcher::MatchState;
pub(crate) use ranking::find_best_match;
pub(crate) use score::{Candidate, score_overload};
