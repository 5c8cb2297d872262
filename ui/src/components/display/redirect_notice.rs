use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct RedirectNoticeProps {
    pub message: String,
    pub team_id: String,
}

/// Full-page confirmation shown while the dashboard redirect is pending
#[component]
pub fn RedirectNotice(props: RedirectNoticeProps) -> Element {
    rsx! {
        div {
            class: "redirect-notice",
            div {
                class: "redirect-card",
                div { class: "redirect-icon", "✓" }
                h2 { class: "redirect-message", "{props.message}" }
                p {
                    class: "redirect-team",
                    "Your Team ID: "
                    span { class: "team-id-value", "{props.team_id}" }
                }
            }
        }
    }
}
