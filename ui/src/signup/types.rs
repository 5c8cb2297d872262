// Core types for the admin sign-up form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Department an administrator belongs to
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Academic,
    Student,
    Technical,
    Administration,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Academic,
        Department::Student,
        Department::Technical,
        Department::Administration,
    ];

    /// Value sent to the backend and used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Academic => "academic",
            Department::Student => "student",
            Department::Technical => "technical",
            Department::Administration => "administration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Academic => "Academic Affairs",
            Department::Student => "Student Services",
            Department::Technical => "Technical Support",
            Department::Administration => "Administration",
        }
    }

    /// Parse a `<select>` value. The empty placeholder option maps to `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

// Form state struct
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AdminSignupForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: Option<Department>,
    pub team_id: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

/// A single edit coming from one of the form inputs
#[derive(Clone, PartialEq, Debug)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    Department(Option<Department>),
    TeamId(String),
    Password(String),
    ConfirmPassword(String),
    AgreeToTerms(bool),
}

impl AdminSignupForm {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FullName(value) => self.full_name = value,
            FieldUpdate::Email(value) => self.email = value,
            FieldUpdate::Phone(value) => self.phone = value,
            FieldUpdate::Department(value) => self.department = value,
            FieldUpdate::TeamId(value) => self.team_id = value,
            FieldUpdate::Password(value) => self.password = value,
            FieldUpdate::ConfirmPassword(value) => self.confirm_password = value,
            FieldUpdate::AgreeToTerms(value) => self.agree_to_terms = value,
        }
    }
}

// Validation status enums
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AvailabilityStatus {
    #[default]
    Unknown,
    Available,
    Taken,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PasswordValidation {
    None,
    Match,
    NoMatch,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EmailValidation {
    None,
    Valid,
    Invalid,
}

/// The one banner shown above the form. Error and success are mutually exclusive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Banner {
    Error(String),
    Success(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Error(message) | Banner::Success(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum SignupAction {
    SetField(FieldUpdate),
    ToggleShowPassword,
    ToggleShowConfirmPassword,

    // Team ID availability
    SetCheckingTeamId(bool),
    SetAvailability(AvailabilityStatus),
    TeamIdChecked {
        team_id: String,
        status: AvailabilityStatus,
        banner: Banner,
    },

    // Submission
    SetSubmission(SubmissionState),

    // Banner
    ShowError(String),
    ShowSuccess(String),
    ClearError,
    DismissBanner,
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct SignupState {
    pub form: AdminSignupForm,
    pub availability: AvailabilityStatus,
    pub is_checking_team_id: bool,
    pub submission: SubmissionState,
    pub banner: Option<Banner>,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

impl SignupState {
    /// Reduces the state based on an action, returning the new state
    pub fn reduce(mut self, action: SignupAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: SignupAction) {
        match action {
            SignupAction::SetField(update) => {
                let team_id_changed = matches!(update, FieldUpdate::TeamId(_));
                self.form.apply(update);

                if team_id_changed {
                    self.availability = AvailabilityStatus::Unknown;
                    // Any success banner before submission belongs to the old team ID
                    self.banner = None;
                } else if self.banner.as_ref().is_some_and(Banner::is_error) {
                    self.banner = None;
                }

                if self.submission == SubmissionState::Failed {
                    self.submission = SubmissionState::Idle;
                }
            }
            SignupAction::ToggleShowPassword => {
                self.show_password = !self.show_password;
            }
            SignupAction::ToggleShowConfirmPassword => {
                self.show_confirm_password = !self.show_confirm_password;
            }

            SignupAction::SetCheckingTeamId(checking) => {
                self.is_checking_team_id = checking;
            }
            SignupAction::SetAvailability(status) => {
                self.availability = status;
            }
            SignupAction::TeamIdChecked {
                team_id,
                status,
                banner,
            } => {
                // Drop results for a team ID the user has since edited away from
                if team_id == self.form.team_id {
                    self.availability = status;
                    self.banner = Some(banner);
                }
            }

            SignupAction::SetSubmission(submission) => {
                self.submission = submission;
            }

            SignupAction::ShowError(message) => {
                self.banner = Some(Banner::Error(message));
            }
            SignupAction::ShowSuccess(message) => {
                self.banner = Some(Banner::Success(message));
            }
            SignupAction::ClearError => {
                if self.banner.as_ref().is_some_and(Banner::is_error) {
                    self.banner = None;
                }
            }
            SignupAction::DismissBanner => {
                self.banner = None;
            }
        }
    }

    /// Helper methods for common state queries
    pub fn is_loading(&self) -> bool {
        matches!(
            self.submission,
            SubmissionState::Validating | SubmissionState::Submitting
        )
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.submission != SubmissionState::Succeeded
    }

    pub fn can_check_team_id(&self) -> bool {
        !self.is_checking_team_id && !self.form.team_id.is_empty()
    }

    /// The account was created and the redirect is pending
    pub fn is_redirecting(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.banner {
            Some(Banner::Error(message)) => Some(message),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.banner {
            Some(Banner::Success(message)) => Some(message),
            _ => None,
        }
    }
}
