//! Remote service facade for the sign-up screen
//!
//! The form only needs two things from the hosted backend: whether a document
//! exists, and creating an administrator account. Both sit behind
//! [`SignupBackend`] so the page can be driven by a fake in tests.

mod firebase;

pub use firebase::FirebaseBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::errors::BackendError;
use crate::signup::types::Department;

/// Payload for creating an administrator account
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub department: Department,
    pub team_id: String,
}

impl fmt::Debug for CreateAdminRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateAdminRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("phone", &self.phone)
            .field("department", &self.department)
            .field("team_id", &self.team_id)
            .finish()
    }
}

/// Account returned by the backend after a successful sign-up
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub uid: String,
    pub email: String,
    pub full_name: String,
    pub department: Department,
    pub team_id: String,
}

#[async_trait(?Send)]
pub trait SignupBackend {
    /// Whether `collection/document_id` exists in the document store
    async fn document_exists(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<bool, BackendError>;

    async fn create_admin_account(
        &self,
        request: CreateAdminRequest,
    ) -> Result<AdminAccount, BackendError>;
}

/// Stand-in used when no backend credentials were supplied at build time
#[derive(Clone, Debug, Default)]
pub struct UnconfiguredBackend;

#[async_trait(?Send)]
impl SignupBackend for UnconfiguredBackend {
    async fn document_exists(
        &self,
        _collection: &str,
        _document_id: &str,
    ) -> Result<bool, BackendError> {
        Err(BackendError::transport("backend is not configured"))
    }

    async fn create_admin_account(
        &self,
        _request: CreateAdminRequest,
    ) -> Result<AdminAccount, BackendError> {
        Err(BackendError::transport("backend is not configured"))
    }
}
