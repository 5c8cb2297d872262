//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging
//! - **platform**: timers that work on both wasm32 and native targets
//! - **validation**: live field feedback and the matching input styles

pub mod console_macros;
pub mod platform;
pub mod validation;

pub use platform::*;
pub use validation::*;
