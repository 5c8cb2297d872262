//! Shared UI and logic for the GradeA+ admin sign-up page.

pub mod app;
pub use app::{AdminSignUp, SignupBackendHandle};

pub mod components;
pub mod services;
pub mod signup;
pub mod utils;
