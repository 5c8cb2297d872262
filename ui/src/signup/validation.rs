//! Client-side validation rules for the admin sign-up form
//!
//! Submission checks run in a fixed order and stop at the first failure, so
//! the user only ever sees one message at a time.

use regex::Regex;
use std::sync::LazyLock;

use crate::services::backend::CreateAdminRequest;
use crate::services::config::FormRules;
use crate::services::errors::ValidationError;
use crate::signup::types::AdminSignupForm;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Length in characters, not bytes
fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Team ID rule shared by the availability check and the submission pipeline
pub fn check_team_id(team_id: &str, rules: &FormRules) -> Result<(), ValidationError> {
    if team_id.is_empty() {
        return Err(ValidationError::MissingTeamId);
    }
    if char_len(team_id) < rules.min_team_id_len {
        return Err(ValidationError::TeamIdTooShort {
            min: rules.min_team_id_len,
        });
    }
    Ok(())
}

/// Run the full submission pipeline and build the account-creation request
pub fn validate_submission(
    form: &AdminSignupForm,
    rules: &FormRules,
) -> Result<CreateAdminRequest, ValidationError> {
    let required = [
        &form.full_name,
        &form.email,
        &form.phone,
        &form.team_id,
        &form.password,
        &form.confirm_password,
    ];
    let Some(department) = form.department else {
        return Err(ValidationError::MissingFields);
    };
    if required.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    check_team_id(&form.team_id, rules)?;

    if char_len(&form.password) < rules.min_password_len {
        return Err(ValidationError::PasswordTooShort {
            min: rules.min_password_len,
        });
    }

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if !form.agree_to_terms {
        return Err(ValidationError::TermsNotAccepted);
    }

    Ok(CreateAdminRequest {
        email: form.email.clone(),
        password: form.password.clone(),
        full_name: form.full_name.clone(),
        phone: form.phone.clone(),
        department,
        team_id: form.team_id.clone(),
    })
}
