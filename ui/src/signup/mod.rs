//! Admin sign-up flow
//!
//! - **types**: form data, UI state, and the reducer that drives it
//! - **validation**: client-side rules checked before anything reaches the backend
//! - **controller**: availability check and submission, reported as actions
//! - **navigation**: delayed redirect once an account exists
//! - **messages**: user-facing banner text

pub mod controller;
pub mod messages;
pub mod navigation;
pub mod types;
pub mod validation;

pub use controller::SignupController;
pub use navigation::Navigate;
pub use types::*;
