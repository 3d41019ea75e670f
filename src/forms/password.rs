//! Password change and reset forms.

use secrecy::{ExposeSecret, SecretString};

use super::FormError;
use crate::password::{score_password, CheckSet, PasswordStrengthResult, SubmissionPolicy};

/// Change form shown to a signed-in user.
#[derive(Debug)]
pub struct PasswordChangeForm {
    pub current: SecretString,
    pub new: SecretString,
    pub confirm: SecretString,
}

/// Reset form reached from an emailed link.
#[derive(Debug)]
pub struct PasswordResetForm {
    pub token: SecretString,
    pub new: SecretString,
    pub confirm: SecretString,
}

impl PasswordChangeForm {
    /// Returns the strength of the new password when the form can be
    /// submitted.
    pub fn validate(
        &self,
        checks: &CheckSet,
        policy: &SubmissionPolicy,
    ) -> Result<PasswordStrengthResult, FormError> {
        if self.current.expose_secret().is_empty() {
            return Err(FormError::Required("current password"));
        }
        let result = validate_new_password(&self.new, &self.confirm, checks, policy)?;
        if self.new.expose_secret() == self.current.expose_secret() {
            return Err(FormError::PasswordUnchanged);
        }
        Ok(result)
    }
}

impl PasswordResetForm {
    pub fn validate(
        &self,
        checks: &CheckSet,
        policy: &SubmissionPolicy,
    ) -> Result<PasswordStrengthResult, FormError> {
        if self.token.expose_secret().trim().is_empty() {
            return Err(FormError::Required("reset token"));
        }
        validate_new_password(&self.new, &self.confirm, checks, policy)
    }
}

fn validate_new_password(
    new: &SecretString,
    confirm: &SecretString,
    checks: &CheckSet,
    policy: &SubmissionPolicy,
) -> Result<PasswordStrengthResult, FormError> {
    if new.expose_secret().is_empty() {
        return Err(FormError::Required("new password"));
    }
    if new.expose_secret() != confirm.expose_secret() {
        return Err(FormError::PasswordMismatch);
    }

    let result = score_password(new, checks);
    if !policy.is_submittable(&result) {
        return Err(FormError::PasswordTooWeak {
            score: result.score,
            required: policy.min_score,
        });
    }
    Ok(result)
}
