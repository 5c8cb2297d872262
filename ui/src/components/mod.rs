//! User Interface Components
//!
//! Reusable Dioxus components for the admin sign-up page:
//!
//! - **forms**: the sign-up form, department selector, and team-ID field
//! - **display**: banners, branding, spinner, and the redirect screen
//! - **inputs**: validated input fields and live validation feedback

pub mod display;
pub mod forms;
pub mod inputs;
