use dioxus::prelude::*;
use ui::services::config::SignupConfig;
use ui::{AdminSignUp, SignupBackendHandle};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SignupConfig::from_build_env);
    use_context_provider(|| SignupBackendHandle::from_config(&config));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "GradeA+ | Admin Sign Up" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signup/admin")]
    SignUp {},
    #[route("/Administrator")]
    Administrator {},
    #[route("/login")]
    Login {},
}

/// Forward a path from the sign-up page to the router
fn go_to(path: String) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(e) => tracing::warn!("No route for {}: {}", path, e),
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        SignUp {}
    }
}

#[component]
fn SignUp() -> Element {
    let config = use_context::<SignupConfig>();

    rsx! {
        AdminSignUp {
            config,
            on_navigate: move |path: String| go_to(path),
        }
    }
}

#[component]
fn Administrator() -> Element {
    rsx! {
        div {
            class: "placeholder-page",
            h1 { "Administrator Dashboard" }
            p { "Your team is ready. The dashboard lives here." }
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        div {
            class: "placeholder-page",
            h1 { "Sign In" }
            Link { to: Route::SignUp {}, "Need an admin account? Sign up" }
        }
    }
}
