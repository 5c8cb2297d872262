//! Orchestration for the admin sign-up form
//!
//! The controller never touches the state directly. Everything it learns is
//! reported through `dispatch` as a [`SignupAction`], which keeps it usable
//! from a Dioxus signal and from a plain `RefCell` in tests alike.

use std::rc::Rc;
use tracing::{error, info, warn};

use crate::services::backend::{AdminAccount, SignupBackend};
use crate::services::config::FormRules;
use crate::services::errors::{SignupError, SignupResult};
use crate::signup::messages::{ACCOUNT_CREATED, TEAM_ID_AVAILABLE, TEAM_ID_TAKEN};
use crate::signup::navigation::{redirect_after, Navigate};
use crate::signup::types::{
    AdminSignupForm, AvailabilityStatus, Banner, SignupAction, SubmissionState,
};
use crate::signup::validation;

/// Raises a busy flag and lowers it again when dropped, whether the
/// operation finished, failed, or its future was cancelled.
struct BusyFlag<'a, D: Fn(SignupAction)> {
    dispatch: &'a D,
    release: Option<SignupAction>,
}

impl<'a, D: Fn(SignupAction)> BusyFlag<'a, D> {
    fn raise(dispatch: &'a D, raise: SignupAction, release: SignupAction) -> Self {
        dispatch(raise);
        Self {
            dispatch,
            release: Some(release),
        }
    }
}

impl<D: Fn(SignupAction)> Drop for BusyFlag<'_, D> {
    fn drop(&mut self) {
        if let Some(action) = self.release.take() {
            (self.dispatch)(action);
        }
    }
}

pub struct SignupController<D, N>
where
    D: Fn(SignupAction),
    N: Navigate,
{
    backend: Rc<dyn SignupBackend>,
    rules: FormRules,
    dispatch: D,
    navigator: N,
}

impl<D, N> SignupController<D, N>
where
    D: Fn(SignupAction),
    N: Navigate,
{
    pub fn new(backend: Rc<dyn SignupBackend>, rules: FormRules, dispatch: D, navigator: N) -> Self {
        Self {
            backend,
            rules,
            dispatch,
            navigator,
        }
    }

    fn report(&self, error: SignupError) -> SignupError {
        (self.dispatch)(SignupAction::ShowError(error.banner_message()));
        error
    }

    /// A failed attempt leaves its banner up and hands the form back in `Idle`
    fn fail_submission(&self, error: SignupError) -> SignupError {
        (self.dispatch)(SignupAction::SetSubmission(SubmissionState::Failed));
        let error = self.report(error);
        (self.dispatch)(SignupAction::SetSubmission(SubmissionState::Idle));
        error
    }

    /// Ask the document store whether `team_id` is already claimed.
    ///
    /// Availability is reported through the state; a taken ID is an `Ok`
    /// result, only validation and transport failures come back as errors.
    pub async fn check_team_id_availability(&self, team_id: &str) -> SignupResult<AvailabilityStatus> {
        if let Err(e) = validation::check_team_id(team_id, &self.rules) {
            return Err(self.report(e.into()));
        }

        let _checking = BusyFlag::raise(
            &self.dispatch,
            SignupAction::SetCheckingTeamId(true),
            SignupAction::SetCheckingTeamId(false),
        );
        (self.dispatch)(SignupAction::ClearError);
        (self.dispatch)(SignupAction::SetAvailability(AvailabilityStatus::Unknown));

        let checked = |status, banner| SignupAction::TeamIdChecked {
            team_id: team_id.to_string(),
            status,
            banner,
        };

        match self
            .backend
            .document_exists(&self.rules.teams_collection, team_id)
            .await
        {
            Ok(true) => {
                info!("Team ID {} is already taken", team_id);
                (self.dispatch)(checked(
                    AvailabilityStatus::Taken,
                    Banner::Error(TEAM_ID_TAKEN.to_string()),
                ));
                Ok(AvailabilityStatus::Taken)
            }
            Ok(false) => {
                info!("Team ID {} is available", team_id);
                (self.dispatch)(checked(
                    AvailabilityStatus::Available,
                    Banner::Success(TEAM_ID_AVAILABLE.to_string()),
                ));
                Ok(AvailabilityStatus::Available)
            }
            Err(e) => {
                warn!("Team ID availability check failed: {}", e);
                let error = SignupError::AvailabilityCheck(e);
                (self.dispatch)(checked(
                    AvailabilityStatus::Unknown,
                    Banner::Error(error.banner_message()),
                ));
                Err(error)
            }
        }
    }

    /// Validate the form, create the account, and redirect after the configured delay.
    ///
    /// The team ID does not have to be confirmed available first; the backend
    /// is the final authority on uniqueness.
    pub async fn submit(&self, form: &AdminSignupForm) -> SignupResult<AdminAccount> {
        (self.dispatch)(SignupAction::DismissBanner);
        (self.dispatch)(SignupAction::SetSubmission(SubmissionState::Validating));

        let request = match validation::validate_submission(form, &self.rules) {
            Ok(request) => request,
            Err(e) => return Err(self.fail_submission(e.into())),
        };

        (self.dispatch)(SignupAction::SetSubmission(SubmissionState::Submitting));

        match self.backend.create_admin_account(request).await {
            Ok(account) => {
                info!("Admin account created for team {}", account.team_id);
                (self.dispatch)(SignupAction::ShowSuccess(ACCOUNT_CREATED.to_string()));
                (self.dispatch)(SignupAction::SetSubmission(SubmissionState::Succeeded));

                redirect_after(
                    &self.navigator,
                    self.rules.redirect_delay(),
                    &self.rules.admin_route,
                )
                .await;
                Ok(account)
            }
            Err(e) => {
                error!("Signup error: {}", e);
                Err(self.fail_submission(SignupError::AccountCreation(e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use crate::services::backend::CreateAdminRequest;
    use crate::services::errors::{BackendError, ValidationError};
    use crate::signup::messages::{ACCOUNT_CREATION_FALLBACK, TEAM_ID_CHECK_FAILED};
    use crate::signup::types::{Department, FieldUpdate, SignupState};

    #[derive(Default)]
    struct FakeBackend {
        existing_teams: Vec<String>,
        lookup_error: Option<BackendError>,
        lookup_delay: Option<Duration>,
        create_error: Option<BackendError>,
        lookups: Cell<usize>,
        created: RefCell<Vec<CreateAdminRequest>>,
    }

    #[async_trait(?Send)]
    impl SignupBackend for FakeBackend {
        async fn document_exists(
            &self,
            collection: &str,
            document_id: &str,
        ) -> Result<bool, BackendError> {
            assert_eq!(collection, "teams");
            self.lookups.set(self.lookups.get() + 1);
            if let Some(delay) = self.lookup_delay {
                tokio::time::sleep(delay).await;
            }
            match &self.lookup_error {
                Some(e) => Err(e.clone()),
                None => Ok(self.existing_teams.iter().any(|t| t == document_id)),
            }
        }

        async fn create_admin_account(
            &self,
            request: CreateAdminRequest,
        ) -> Result<AdminAccount, BackendError> {
            self.created.borrow_mut().push(request.clone());
            match &self.create_error {
                Some(e) => Err(e.clone()),
                None => Ok(AdminAccount {
                    uid: "uid-1".to_string(),
                    email: request.email,
                    full_name: request.full_name,
                    department: request.department,
                    team_id: request.team_id,
                }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigate for &RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    struct Harness {
        backend: Rc<FakeBackend>,
        state: Rc<RefCell<SignupState>>,
        actions: Rc<RefCell<Vec<SignupAction>>>,
        navigator: RecordingNavigator,
    }

    impl Harness {
        fn new(backend: FakeBackend) -> Self {
            Self {
                backend: Rc::new(backend),
                state: Rc::new(RefCell::new(SignupState::default())),
                actions: Rc::new(RefCell::new(Vec::new())),
                navigator: RecordingNavigator::default(),
            }
        }

        fn controller(&self) -> SignupController<impl Fn(SignupAction), &RecordingNavigator> {
            let state = self.state.clone();
            let actions = self.actions.clone();
            SignupController::new(
                self.backend.clone(),
                FormRules::default(),
                move |action: SignupAction| {
                    actions.borrow_mut().push(action.clone());
                    state.borrow_mut().reduce_in_place(action);
                },
                &self.navigator,
            )
        }

        fn edit(&self, update: FieldUpdate) {
            self.state
                .borrow_mut()
                .reduce_in_place(SignupAction::SetField(update));
        }

        fn fill(&self, form: &AdminSignupForm) {
            self.state.borrow_mut().form = form.clone();
        }

        fn snapshot(&self) -> SignupState {
            self.state.borrow().clone()
        }

        fn submission_trail(&self) -> Vec<SubmissionState> {
            self.actions
                .borrow()
                .iter()
                .filter_map(|action| match action {
                    SignupAction::SetSubmission(submission) => Some(*submission),
                    _ => None,
                })
                .collect()
        }
    }

    fn scenario_form() -> AdminSignupForm {
        AdminSignupForm {
            full_name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: "1".to_string(),
            department: Some(Department::Academic),
            team_id: "TEAM01".to_string(),
            password: "password1".to_string(),
            confirm_password: "password1".to_string(),
            agree_to_terms: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_signup_redirects_after_delay() {
        let harness = Harness::new(FakeBackend::default());
        let form = scenario_form();
        harness.fill(&form);
        let start = tokio::time::Instant::now();

        let account = harness.controller().submit(&form).await.unwrap();

        assert_eq!(account.team_id, "TEAM01");
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(*harness.navigator.visited.borrow(), vec!["/Administrator".to_string()]);

        let state = harness.snapshot();
        assert_eq!(state.success_message(), Some(ACCOUNT_CREATED));
        assert_eq!(state.submission, SubmissionState::Succeeded);
        assert!(!state.is_loading());

        let created = harness.backend.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].department, Department::Academic);
        assert_eq!(created[0].phone, "1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_banner_and_idle_before_navigation() {
        let harness = Harness::new(FakeBackend::default());
        let form = scenario_form();
        harness.fill(&form);
        let controller = harness.controller();

        let result =
            tokio::time::timeout(Duration::from_millis(1500), controller.submit(&form)).await;

        // Cancelled mid-delay: banner is up, loading is off, nothing navigated
        assert!(result.is_err());
        let state = harness.snapshot();
        assert_eq!(state.success_message(), Some(ACCOUNT_CREATED));
        assert!(!state.is_loading());
        assert!(harness.navigator.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_never_calls_backend() {
        let mut form = scenario_form();
        form.phone.clear();
        let harness = Harness::new(FakeBackend::default());

        let result = harness.controller().submit(&form).await;

        assert_eq!(
            result.unwrap_err(),
            SignupError::Validation(ValidationError::MissingFields)
        );
        assert!(harness.backend.created.borrow().is_empty());
        let state = harness.snapshot();
        assert_eq!(state.error_message(), Some("Please fill in all fields"));
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(!state.is_loading());
        assert_eq!(
            harness.submission_trail(),
            vec![
                SubmissionState::Validating,
                SubmissionState::Failed,
                SubmissionState::Idle,
            ]
        );
    }

    #[tokio::test]
    async fn test_each_rule_blocks_submission() {
        let cases: [(fn(&mut AdminSignupForm), &str); 5] = [
            (|f| f.email = "a@b".to_string(), "Please enter a valid email address"),
            (|f| f.team_id = "TEAM".to_string(), "Team ID must be at least 6 characters long"),
            (
                |f| {
                    f.password = "pass".to_string();
                    f.confirm_password = "pass".to_string();
                },
                "Password must be at least 8 characters long",
            ),
            (|f| f.confirm_password = "password2".to_string(), "Passwords do not match"),
            (|f| f.agree_to_terms = false, "You must agree to the terms and conditions"),
        ];

        for (break_form, message) in cases {
            let harness = Harness::new(FakeBackend::default());
            let mut form = scenario_form();
            break_form(&mut form);

            assert!(harness.controller().submit(&form).await.is_err());
            assert_eq!(harness.snapshot().error_message(), Some(message));
            assert!(harness.backend.created.borrow().is_empty());
        }
    }

    #[tokio::test]
    async fn test_backend_message_is_shown_on_failure() {
        let harness = Harness::new(FakeBackend {
            create_error: Some(BackendError::Rejected {
                code: "EMAIL_EXISTS".to_string(),
                message: Some("This email is already registered.".to_string()),
            }),
            ..FakeBackend::default()
        });

        let result = harness.controller().submit(&scenario_form()).await;

        assert!(matches!(result, Err(SignupError::AccountCreation(_))));
        let state = harness.snapshot();
        assert_eq!(state.error_message(), Some("This email is already registered."));
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.can_submit());
        assert_eq!(
            harness.submission_trail(),
            vec![
                SubmissionState::Validating,
                SubmissionState::Submitting,
                SubmissionState::Failed,
                SubmissionState::Idle,
            ]
        );
        assert!(harness.navigator.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_message_without_backend_message() {
        let harness = Harness::new(FakeBackend {
            create_error: Some(BackendError::transport("connection refused")),
            ..FakeBackend::default()
        });

        let _ = harness.controller().submit(&scenario_form()).await;

        assert_eq!(harness.snapshot().error_message(), Some(ACCOUNT_CREATION_FALLBACK));
    }

    #[tokio::test]
    async fn test_submit_clears_previous_banner() {
        let harness = Harness::new(FakeBackend::default());
        harness
            .state
            .borrow_mut()
            .reduce_in_place(SignupAction::ShowSuccess("✓ Team ID is available!".to_string()));
        let mut form = scenario_form();
        form.agree_to_terms = false;

        let _ = harness.controller().submit(&form).await;

        let state = harness.snapshot();
        assert_eq!(state.success_message(), None);
        assert_eq!(
            state.error_message(),
            Some("You must agree to the terms and conditions")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_taken_team_id_can_still_be_submitted() {
        let harness = Harness::new(FakeBackend {
            existing_teams: vec!["TEAM01".to_string()],
            ..FakeBackend::default()
        });
        let form = scenario_form();
        harness.fill(&form);

        let status = harness.controller().check_team_id_availability("TEAM01").await;
        assert_eq!(status, Ok(AvailabilityStatus::Taken));

        assert!(harness.controller().submit(&form).await.is_ok());
        assert_eq!(harness.backend.created.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_taken_team_id_sets_error_banner() {
        let harness = Harness::new(FakeBackend {
            existing_teams: vec!["TEAM01".to_string()],
            ..FakeBackend::default()
        });
        harness.edit(FieldUpdate::TeamId("TEAM01".to_string()));

        let status = harness.controller().check_team_id_availability("TEAM01").await;

        assert_eq!(status, Ok(AvailabilityStatus::Taken));
        let state = harness.snapshot();
        assert_eq!(state.availability, AvailabilityStatus::Taken);
        assert_eq!(state.error_message(), Some(TEAM_ID_TAKEN));
        assert!(!state.is_checking_team_id);
    }

    #[tokio::test]
    async fn test_free_team_id_sets_success_banner() {
        let harness = Harness::new(FakeBackend::default());
        harness.edit(FieldUpdate::TeamId("TEAM01".to_string()));

        let status = harness.controller().check_team_id_availability("TEAM01").await;

        assert_eq!(status, Ok(AvailabilityStatus::Available));
        let state = harness.snapshot();
        assert_eq!(state.availability, AvailabilityStatus::Available);
        assert_eq!(state.success_message(), Some(TEAM_ID_AVAILABLE));
        assert!(!state.is_checking_team_id);
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_status_unknown() {
        let harness = Harness::new(FakeBackend {
            lookup_error: Some(BackendError::transport("offline")),
            ..FakeBackend::default()
        });
        harness.edit(FieldUpdate::TeamId("TEAM01".to_string()));

        let result = harness.controller().check_team_id_availability("TEAM01").await;

        assert!(matches!(result, Err(SignupError::AvailabilityCheck(_))));
        let state = harness.snapshot();
        assert_eq!(state.availability, AvailabilityStatus::Unknown);
        assert_eq!(state.error_message(), Some(TEAM_ID_CHECK_FAILED));
        assert!(!state.is_checking_team_id);
    }

    #[tokio::test]
    async fn test_short_team_id_is_rejected_without_lookup() {
        let harness = Harness::new(FakeBackend::default());

        for team_id in ["", "TEAM0"] {
            let result = harness.controller().check_team_id_availability(team_id).await;
            assert!(matches!(result, Err(SignupError::Validation(_))));
        }

        assert_eq!(harness.backend.lookups.get(), 0);
        assert_eq!(
            harness.snapshot().error_message(),
            Some("Team ID must be at least 6 characters long")
        );
    }

    #[tokio::test]
    async fn test_empty_team_id_asks_for_one() {
        let harness = Harness::new(FakeBackend::default());

        let _ = harness.controller().check_team_id_availability("").await;

        assert_eq!(harness.snapshot().error_message(), Some("Please enter a Team ID"));
    }

    #[tokio::test]
    async fn test_editing_team_id_after_check_resets_status() {
        let harness = Harness::new(FakeBackend::default());
        harness.edit(FieldUpdate::TeamId("TEAM01".to_string()));
        let _ = harness.controller().check_team_id_availability("TEAM01").await;
        assert_eq!(harness.snapshot().availability, AvailabilityStatus::Available);

        harness.edit(FieldUpdate::TeamId("TEAM012".to_string()));

        assert_eq!(harness.snapshot().availability, AvailabilityStatus::Unknown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_check_lowers_busy_flag() {
        let harness = Harness::new(FakeBackend {
            lookup_delay: Some(Duration::from_secs(10)),
            ..FakeBackend::default()
        });
        harness.edit(FieldUpdate::TeamId("TEAM01".to_string()));
        let controller = harness.controller();

        let check = controller.check_team_id_availability("TEAM01");
        let result = tokio::time::timeout(Duration::from_secs(1), check).await;

        assert!(result.is_err());
        let state = harness.snapshot();
        assert!(!state.is_checking_team_id);
        assert_eq!(state.availability, AvailabilityStatus::Unknown);
    }
}
