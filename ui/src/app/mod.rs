pub mod admin_signup;

pub use admin_signup::{AdminSignUp, SignupBackendHandle};
