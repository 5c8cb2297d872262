use dioxus::prelude::*;

#[component]
pub fn BrandLogo(#[props(default)] compact: bool) -> Element {
    rsx! {
        div {
            class: if compact { "brand-logo compact" } else { "brand-logo" },
            div { class: "brand-mark", "</>" }
            div {
                h1 {
                    class: "brand-name",
                    "GradeA"
                    span { class: "brand-accent", "+" }
                }
                if !compact {
                    p { class: "brand-tagline", "Student Management System" }
                }
            }
        }
    }
}

#[component]
pub fn BrandingPanel() -> Element {
    rsx! {
        div {
            class: "branding-panel",
            BrandLogo {}
            div {
                class: "feature-card",
                div { class: "feature-icon", "</>" }
                h3 { "Comprehensive Control" }
                p { "Access all system features including grading, announcements, and student management." }
            }
            div {
                class: "feature-card",
                div { class: "feature-icon", "→" }
                h3 { "Real-Time Insights" }
                p { "Monitor student progress, attendance, and performance metrics in real-time." }
            }
        }
    }
}

#[component]
pub fn SecurityNotice() -> Element {
    rsx! {
        div {
            class: "security-notice",
            p { class: "security-title", "Security Notice" }
            p {
                class: "security-text",
                "Admin accounts have elevated privileges. Ensure you keep your credentials secure and share your Team ID only with authorized students."
            }
        }
    }
}
