pub mod admin_signup_form;
pub mod department_selector;
pub mod team_id_field;

pub use admin_signup_form::*;
pub use department_selector::*;
pub use team_id_field::*;
