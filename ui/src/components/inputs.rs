//! Input components for form validation and display

use crate::signup::types::{EmailValidation, PasswordValidation};
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default = "input-field".to_string())]
    pub input_class: String,
    #[props(default)]
    pub input_style: String,
    #[props(default)]
    pub disabled: bool,
    #[props(default = true)]
    pub required: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            name: "{props.name}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            required: props.required,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct PasswordInputProps {
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub visible: bool,
    #[props(default = "input-field".to_string())]
    pub input_class: String,
    #[props(default)]
    pub input_style: String,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_toggle: EventHandler<()>,
}

/// Password field with a show/hide toggle
#[component]
pub fn PasswordInput(props: PasswordInputProps) -> Element {
    let input_type = if props.visible {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        div {
            class: "password-input-container",
            ValidatedInput {
                name: props.name,
                value: props.value,
                placeholder: props.placeholder,
                input_type,
                input_class: format!("{} password-input", props.input_class),
                input_style: props.input_style,
                disabled: props.disabled,
                on_change: props.on_change,
            }
            button {
                r#type: "button",
                class: "password-toggle",
                title: if props.visible { "Hide password" } else { "Show password" },
                onclick: move |_| props.on_toggle.call(()),
                if props.visible { "🙈" } else { "👁" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct PasswordValidationFeedbackProps {
    pub validation: PasswordValidation,
}

#[component]
pub fn PasswordValidationFeedback(props: PasswordValidationFeedbackProps) -> Element {
    match props.validation {
        PasswordValidation::Match => rsx! {
            div {
                class: "validation-feedback match",
                "✓ Passwords match"
            }
        },
        PasswordValidation::NoMatch => rsx! {
            div {
                class: "validation-feedback no-match",
                "⚠ Passwords do not match"
            }
        },
        PasswordValidation::None => rsx! {},
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct EmailValidationFeedbackProps {
    pub validation: EmailValidation,
}

#[component]
pub fn EmailValidationFeedback(props: EmailValidationFeedbackProps) -> Element {
    match props.validation {
        EmailValidation::Invalid => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ Please enter a valid email address"
            }
        },
        _ => rsx! {},
    }
}
