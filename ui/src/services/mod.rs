//! Infrastructure Services
//!
//! - **backend**: the remote service facade and its Firebase REST implementation
//! - **config**: form rules and backend credentials
//! - **errors**: validation, backend, and sign-up error types
//!
//! Traits here use `async_trait(?Send)` so they run on the single-threaded
//! wasm event loop.

pub mod backend;
pub mod config;
pub mod errors;
