use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::display::{BrandingPanel, RedirectNotice};
use crate::components::forms::AdminSignupFormComponent;
use crate::services::backend::{FirebaseBackend, SignupBackend, UnconfiguredBackend};
use crate::services::config::{FormRules, SignupConfig};
use crate::signup::{SignupAction, SignupController, SignupState};
use crate::{console_error, console_info, console_warn};

const ADMIN_SIGNUP_CSS: Asset = asset!("/assets/styling/admin_signup.css");

/// Backend shared through context so the page can be rendered against a fake
#[derive(Clone)]
pub struct SignupBackendHandle(pub Rc<dyn SignupBackend>);

impl SignupBackendHandle {
    pub fn new(backend: impl SignupBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }

    pub fn from_config(config: &SignupConfig) -> Self {
        if config.backend.is_configured() {
            Self::new(FirebaseBackend::new(
                config.backend.clone(),
                config.rules.teams_collection.clone(),
                config.rules.admins_collection.clone(),
            ))
        } else {
            tracing::warn!("Firebase credentials missing; sign-up requests will fail");
            Self::new(UnconfiguredBackend)
        }
    }
}

/// Reduce into the signal, dropping actions that arrive after the page is gone
fn dispatcher(state: Signal<SignupState>) -> impl Fn(SignupAction) + Copy + 'static {
    move |action: SignupAction| {
        let mut state = state;
        match state.try_write() {
            Ok(mut current) => current.reduce_in_place(action),
            Err(_) => tracing::debug!("Dropping {:?}, sign-up page is no longer mounted", action),
        };
    }
}

fn signup_controller(
    backend: &SignupBackendHandle,
    rules: &FormRules,
    state: Signal<SignupState>,
    on_navigate: EventHandler<String>,
) -> SignupController<impl Fn(SignupAction), EventHandler<String>> {
    SignupController::new(backend.0.clone(), rules.clone(), dispatcher(state), on_navigate)
}

#[component]
pub fn AdminSignUp(config: SignupConfig, on_navigate: EventHandler<String>) -> Element {
    let state = use_signal(SignupState::default);
    let backend = use_context::<SignupBackendHandle>();

    let dispatch = EventHandler::new(dispatcher(state));

    let on_check = {
        let backend = backend.clone();
        let rules = config.rules.clone();
        move |_: ()| {
            if !state.peek().can_check_team_id() {
                return;
            }
            let team_id = state.peek().form.team_id.clone();
            let controller = signup_controller(&backend, &rules, state, on_navigate);
            spawn(async move {
                match controller.check_team_id_availability(&team_id).await {
                    Ok(status) => console_info!("[Signup] Team ID {} is {:?}", team_id, status),
                    Err(e) => console_warn!("[Signup] Team ID check for {} failed: {}", team_id, e),
                }
            });
        }
    };

    let on_submit = {
        let rules = config.rules.clone();
        move |_: ()| {
            if !state.peek().can_submit() {
                return;
            }
            let form = state.peek().form.clone();
            let controller = signup_controller(&backend, &rules, state, on_navigate);
            spawn(async move {
                match controller.submit(&form).await {
                    Ok(account) => console_info!("[Signup] Admin account ready for team {}", account.team_id),
                    Err(e) if e.is_retryable() => console_warn!("[Signup] Sign-up failed, retry possible: {}", e),
                    Err(e) => console_error!("[Signup] Sign-up failed: {}", e),
                }
            });
        }
    };

    let login_route = config.rules.login_route.clone();
    let on_sign_in = move |_: ()| on_navigate.call(login_route.clone());

    let current = state();
    if current.is_redirecting() {
        return rsx! {
            document::Link { rel: "stylesheet", href: ADMIN_SIGNUP_CSS }
            RedirectNotice {
                message: current.success_message().unwrap_or_default().to_string(),
                team_id: current.form.team_id.clone(),
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_SIGNUP_CSS }

        div {
            class: "signup-page",
            div {
                class: "signup-layout",
                BrandingPanel {}
                div {
                    class: "signup-column",
                    AdminSignupFormComponent {
                        state,
                        dispatch,
                        on_check,
                        on_submit,
                        on_sign_in,
                    }
                    p { class: "footer-note", "© 2025 GradeA+. All rights reserved." }
                }
            }
        }
    }
}
