use crate::signup::types::{AvailabilityStatus, EmailValidation, PasswordValidation, SignupState};
use crate::signup::validation::is_valid_email;

impl SignupState {
    /// Live feedback for the confirm-password field
    pub fn password_validation(&self) -> PasswordValidation {
        let form = &self.form;
        if form.confirm_password.is_empty() {
            PasswordValidation::None
        } else if form.password == form.confirm_password {
            PasswordValidation::Match
        } else {
            PasswordValidation::NoMatch
        }
    }

    pub fn email_validation(&self) -> EmailValidation {
        if self.form.email.is_empty() {
            EmailValidation::None
        } else if is_valid_email(&self.form.email) {
            EmailValidation::Valid
        } else {
            EmailValidation::Invalid
        }
    }
}

pub fn availability_class(status: &AvailabilityStatus) -> &'static str {
    match status {
        AvailabilityStatus::Available => "input-field input-available",
        AvailabilityStatus::Taken => "input-field input-unavailable",
        AvailabilityStatus::Unknown => "input-field",
    }
}

pub fn availability_style(status: &AvailabilityStatus) -> &'static str {
    match status {
        AvailabilityStatus::Available => "border: 2px solid #10b981; background-color: #f0fdf4;",
        AvailabilityStatus::Taken => "border: 2px solid #ef4444; background-color: #fef2f2;",
        AvailabilityStatus::Unknown => "",
    }
}

pub fn password_validation_class(validation: &PasswordValidation) -> &'static str {
    match validation {
        PasswordValidation::Match => "input-field input-valid",
        PasswordValidation::NoMatch => "input-field input-invalid",
        PasswordValidation::None => "input-field",
    }
}

pub fn password_validation_style(validation: &PasswordValidation) -> &'static str {
    match validation {
        PasswordValidation::Match => "border: 2px solid #10b981; background-color: #f0fdf4;",
        PasswordValidation::NoMatch => "border: 2px solid #ef4444; background-color: #fef2f2;",
        PasswordValidation::None => "",
    }
}

pub fn email_validation_class(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "input-field input-valid",
        EmailValidation::Invalid => "input-field input-invalid",
        EmailValidation::None => "input-field",
    }
}

pub fn email_validation_style(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "border: 2px solid #10b981; background-color: #f0fdf4;",
        EmailValidation::Invalid => "border: 2px solid #ef4444; background-color: #fef2f2;",
        EmailValidation::None => "",
    }
}
