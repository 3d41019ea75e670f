//! Password strength scoring.
//!
//! A password is run through an ordered set of named checks; the score is the
//! number of checks it satisfies.

mod checks;
mod policy;
mod result;
mod scorer;

pub use checks::{Check, CheckSet, MIN_LENGTH, SPECIAL_CHARACTERS};
pub use policy::{ConfigError, SubmissionPolicy, DEFAULT_MIN_SCORE};
pub use result::{PasswordStrengthResult, Severity, StrengthLabel};
pub use scorer::score_password;

#[cfg(feature = "async")]
pub use scorer::score_password_tx;
