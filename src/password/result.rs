//! Score, label and severity of an evaluated password.

use std::fmt;

use serde::Serialize;

/// Qualitative strength shown next to the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: usize) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Fair,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Weak => Severity::Error,
            Self::Fair => Severity::Warning,
            Self::Good => Severity::Info,
            Self::Strong => Severity::Success,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation severity, mirrors [`StrengthLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

/// Outcome of running a password through a check set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrengthResult {
    pub score: usize,
    /// Check name and outcome, in check set order.
    pub checks: Vec<(&'static str, bool)>,
}

impl PasswordStrengthResult {
    /// Outcome of the check called `name`, if it was evaluated.
    pub fn passed(&self, name: &str) -> Option<bool> {
        self.checks.iter().find(|(n, _)| *n == name).map(|(_, ok)| *ok)
    }

    /// Number of checks evaluated.
    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score)
    }

    pub fn severity(&self) -> Severity {
        self.label().severity()
    }

    /// Progress in percent, for the strength bar.
    pub fn percent(&self) -> u8 {
        if self.checks.is_empty() {
            return 0;
        }
        ((self.score * 100) / self.checks.len()).min(100) as u8
    }
}
