//! Configuration for the admin sign-up screen
//!
//! Form rules have fixed defaults. Backend credentials are baked in at build
//! time from `GRADEA_FIREBASE_API_KEY` and `GRADEA_FIREBASE_PROJECT_ID`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    pub rules: FormRules,
    pub backend: BackendConfig,
}

impl SignupConfig {
    pub fn from_build_env() -> Self {
        Self {
            rules: FormRules::default(),
            backend: BackendConfig::from_build_env(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRules {
    pub min_team_id_len: usize,
    pub min_password_len: usize,
    pub redirect_delay_ms: u64,
    pub admin_route: String,
    pub login_route: String,
    pub teams_collection: String,
    pub admins_collection: String,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            min_team_id_len: 6,
            min_password_len: 8,
            redirect_delay_ms: 2000, // 2 seconds on the success screen
            admin_route: "/Administrator".to_string(),
            login_route: "/login".to_string(),
            teams_collection: "teams".to_string(),
            admins_collection: "admins".to_string(),
        }
    }
}

impl FormRules {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub api_key: String,
    pub project_id: String,
    pub auth_base: String,
    pub firestore_base: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            auth_base: "https://identitytoolkit.googleapis.com/v1".to_string(),
            firestore_base: "https://firestore.googleapis.com/v1".to_string(),
        }
    }
}

impl BackendConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_key: option_env!("GRADEA_FIREBASE_API_KEY")
                .unwrap_or_default()
                .to_string(),
            project_id: option_env!("GRADEA_FIREBASE_PROJECT_ID")
                .unwrap_or_default()
                .to_string(),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.project_id.is_empty()
    }
}
