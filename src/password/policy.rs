//! Submission gating for password forms.

use thiserror::Error;

use super::PasswordStrengthResult;

/// Minimum score used when none is configured.
pub const DEFAULT_MIN_SCORE: usize = 3;

const MIN_SCORE_VAR: &str = "PWD_MIN_SCORE";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid minimum password score in PWD_MIN_SCORE: {0:?}")]
    InvalidMinScore(String),
}

/// Blocks form submission while the score is below `min_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub min_score: usize,
}

impl SubmissionPolicy {
    pub const fn new(min_score: usize) -> Self {
        Self { min_score }
    }

    /// Reads the threshold from `PWD_MIN_SCORE`.
    ///
    /// Falls back to [`DEFAULT_MIN_SCORE`] when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = std::env::var(MIN_SCORE_VAR) else {
            return Ok(Self::default());
        };

        match raw.trim().parse::<usize>() {
            Ok(min_score) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Password submission threshold set to {}", min_score);
                Ok(Self::new(min_score))
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Invalid {} value: {:?}", MIN_SCORE_VAR, raw);
                Err(ConfigError::InvalidMinScore(raw))
            }
        }
    }

    pub fn is_submittable(&self, result: &PasswordStrengthResult) -> bool {
        result.score >= self.min_score
    }
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}
