use dioxus::prelude::*;

use crate::components::{
    display::{BrandLogo, LoadingIndicator, SecurityNotice, StatusBanner},
    forms::{DepartmentSelector, TeamIdField},
    inputs::{
        EmailValidationFeedback, InputType, PasswordInput, PasswordValidationFeedback,
        ValidatedInput,
    },
};
use crate::signup::types::*;
use crate::utils::validation::{
    email_validation_class, email_validation_style, password_validation_class,
    password_validation_style,
};

#[derive(Props, PartialEq, Clone)]
pub struct AdminSignupFormProps {
    pub state: Signal<SignupState>,
    pub dispatch: EventHandler<SignupAction>,
    pub on_check: EventHandler<()>,
    pub on_submit: EventHandler<()>,
    pub on_sign_in: EventHandler<()>,
}

#[component]
pub fn AdminSignupFormComponent(props: AdminSignupFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;
    let on_sign_in = props.on_sign_in;

    let set = move |update: FieldUpdate| dispatch.call(SignupAction::SetField(update));
    let current = state();
    let form = &current.form;
    let loading = current.is_loading();

    rsx! {
        div {
            class: "signup-card",

            div {
                class: "mobile-brand",
                BrandLogo { compact: true }
            }

            div {
                class: "form-header",
                h2 { class: "form-title", "Create Admin Account" }
                p { class: "form-subtitle", "Set up your team and manage students" }
            }

            if let Some(banner) = current.banner.clone() {
                StatusBanner {
                    banner,
                    on_dismiss: move |_| dispatch.call(SignupAction::DismissBanner),
                }
            }

            form {
                class: "signup-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                div {
                    class: "input-section",
                    label { class: "input-label", "Full Name *" }
                    ValidatedInput {
                        name: "fullName".to_string(),
                        value: form.full_name.clone(),
                        placeholder: "John Doe".to_string(),
                        input_type: InputType::Text,
                        disabled: loading,
                        on_change: move |value| set(FieldUpdate::FullName(value)),
                    }
                }

                div {
                    class: "input-section",
                    label { class: "input-label", "Email Address *" }
                    ValidatedInput {
                        name: "email".to_string(),
                        value: form.email.clone(),
                        placeholder: "admin@example.com".to_string(),
                        input_type: InputType::Email,
                        input_class: email_validation_class(&current.email_validation()).to_string(),
                        input_style: email_validation_style(&current.email_validation()).to_string(),
                        disabled: loading,
                        on_change: move |value| set(FieldUpdate::Email(value)),
                    }
                    EmailValidationFeedback { validation: current.email_validation() }
                }

                div {
                    class: "input-row",
                    div {
                        class: "input-section",
                        label { class: "input-label", "Phone Number *" }
                        ValidatedInput {
                            name: "phone".to_string(),
                            value: form.phone.clone(),
                            placeholder: "+233 XXX XXX XXX".to_string(),
                            input_type: InputType::Tel,
                            disabled: loading,
                            on_change: move |value| set(FieldUpdate::Phone(value)),
                        }
                    }
                    div {
                        class: "input-section",
                        label { class: "input-label", "Department *" }
                        DepartmentSelector {
                            selected: form.department,
                            disabled: loading,
                            on_change: move |department| set(FieldUpdate::Department(department)),
                        }
                    }
                }

                div {
                    class: "input-section",
                    label { class: "input-label", "Team ID (Unique - Share with your students) *" }
                    TeamIdField {
                        value: form.team_id.clone(),
                        availability: current.availability,
                        is_checking: current.is_checking_team_id,
                        disabled: loading,
                        on_change: move |value| set(FieldUpdate::TeamId(value)),
                        on_check: props.on_check,
                    }
                }

                div {
                    class: "input-section",
                    label { class: "input-label", "Password *" }
                    PasswordInput {
                        name: "password".to_string(),
                        value: form.password.clone(),
                        placeholder: "At least 8 characters".to_string(),
                        visible: current.show_password,
                        disabled: loading,
                        on_change: move |value| set(FieldUpdate::Password(value)),
                        on_toggle: move |_| dispatch.call(SignupAction::ToggleShowPassword),
                    }
                }

                div {
                    class: "input-section",
                    label { class: "input-label", "Confirm Password *" }
                    PasswordInput {
                        name: "confirmPassword".to_string(),
                        value: form.confirm_password.clone(),
                        placeholder: "Re-enter your password".to_string(),
                        visible: current.show_confirm_password,
                        input_class: password_validation_class(&current.password_validation()).to_string(),
                        input_style: password_validation_style(&current.password_validation()).to_string(),
                        disabled: loading,
                        on_change: move |value| set(FieldUpdate::ConfirmPassword(value)),
                        on_toggle: move |_| dispatch.call(SignupAction::ToggleShowConfirmPassword),
                    }
                    PasswordValidationFeedback { validation: current.password_validation() }
                }

                div {
                    class: "terms-row",
                    input {
                        r#type: "checkbox",
                        name: "agreeToTerms",
                        checked: form.agree_to_terms,
                        disabled: loading,
                        required: true,
                        onchange: move |evt| set(FieldUpdate::AgreeToTerms(evt.checked())),
                    }
                    label {
                        class: "terms-label",
                        "I agree to the "
                        span { class: "terms-link", "Terms and Conditions" }
                        " and "
                        span { class: "terms-link", "Privacy Policy" }
                    }
                }

                button {
                    r#type: "submit",
                    class: if loading { "submit-button loading" } else { "submit-button" },
                    disabled: loading,
                    if loading {
                        LoadingIndicator { message: "Creating Admin Account...".to_string() }
                    } else {
                        "Create Admin Account →"
                    }
                }
            }

            div { class: "divider", span { "or" } }

            p {
                class: "sign-in-prompt",
                "Already have an account? "
                button {
                    r#type: "button",
                    class: "sign-in-link",
                    onclick: move |_| on_sign_in.call(()),
                    "Sign In"
                }
            }

            SecurityNotice {}
        }
    }
}
