use dioxus::prelude::*;

use crate::components::inputs::{InputType, ValidatedInput};
use crate::signup::types::AvailabilityStatus;
use crate::utils::validation::{availability_class, availability_style};

#[derive(Props, PartialEq, Clone)]
pub struct TeamIdFieldProps {
    pub value: String,
    pub availability: AvailabilityStatus,
    pub is_checking: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_check: EventHandler<()>,
}

/// Team ID input with its availability "Check" button
#[component]
pub fn TeamIdField(props: TeamIdFieldProps) -> Element {
    let on_check = props.on_check;
    let check_disabled = props.is_checking || props.value.is_empty();

    rsx! {
        div {
            class: "team-id-row",
            ValidatedInput {
                name: "teamId".to_string(),
                value: props.value,
                placeholder: "Enter unique team ID (e.g., TEAM001)".to_string(),
                input_type: InputType::Text,
                input_class: format!("{} team-id-input", availability_class(&props.availability)),
                input_style: availability_style(&props.availability).to_string(),
                disabled: props.disabled,
                on_change: props.on_change,
            }
            button {
                r#type: "button",
                class: "check-button",
                disabled: check_disabled,
                onclick: move |_| on_check.call(()),
                if props.is_checking { "Checking..." } else { "Check" }
            }
        }
        p {
            class: "input-hint",
            "This ID will be used by students to join your team"
        }
    }
}
