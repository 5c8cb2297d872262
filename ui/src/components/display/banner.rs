use dioxus::prelude::*;

use crate::signup::types::Banner;

#[derive(Props, PartialEq, Clone)]
pub struct StatusBannerProps {
    pub banner: Banner,
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let (class, icon) = if props.banner.is_error() {
        ("status-banner banner-error", "⚠")
    } else {
        ("status-banner banner-success", "✓")
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { class: "banner-icon", "{icon}" }
            p { class: "banner-message", "{props.banner.message()}" }
            button {
                r#type: "button",
                class: "banner-dismiss",
                title: "Dismiss",
                onclick: move |_| props.on_dismiss.call(()),
                "×"
            }
        }
    }
}
