use dioxus::prelude::*;

use crate::signup::types::Department;

#[derive(Props, PartialEq, Clone)]
pub struct DepartmentSelectorProps {
    pub selected: Option<Department>,
    pub disabled: bool,
    pub on_change: EventHandler<Option<Department>>,
}

#[component]
pub fn DepartmentSelector(props: DepartmentSelectorProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;
    let current = selected.map(|d| d.as_str()).unwrap_or_default();

    rsx! {
        select {
            class: "input-field department-selector",
            name: "department",
            value: "{current}",
            disabled: props.disabled,
            required: true,
            onchange: move |evt| {
                // The placeholder option has an empty value
                on_change.call(Department::from_value(&evt.value()));
            },
            option {
                value: "",
                selected: selected.is_none(),
                "Select Department"
            }
            for department in Department::ALL {
                option {
                    value: "{department.as_str()}",
                    selected: selected == Some(department),
                    "{department.label()}"
                }
            }
        }
    }
}
