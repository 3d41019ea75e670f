//! Typed form states and their validation.

mod blog;
mod password;

use thiserror::Error;

pub use blog::{BlogForm, BlogPostDraft};
pub use password::{PasswordChangeForm, PasswordResetForm};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Slug must be lowercase letters and digits separated by single dashes: {0}")]
    InvalidSlug(String),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password is too weak (score {score}, at least {required} required)")]
    PasswordTooWeak { score: usize, required: usize },
    #[error("New password must differ from the current one")]
    PasswordUnchanged,
}

/// Trims `value` and rejects it when blank.
fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_string())
}
