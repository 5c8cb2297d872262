use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{error, info, instrument, warn};

use super::{AdminAccount, CreateAdminRequest, SignupBackend};
use crate::services::config::BackendConfig;
use crate::services::errors::BackendError;
use crate::signup::messages::TEAM_ID_TAKEN;

/// Firebase Identity Toolkit + Firestore REST client
#[derive(Clone)]
pub struct FirebaseBackend {
    pub(crate) http_client: Client,
    config: BackendConfig,
    admins_collection: String,
    teams_collection: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
    id_token: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl FirebaseBackend {
    pub fn new(
        config: BackendConfig,
        teams_collection: impl Into<String>,
        admins_collection: impl Into<String>,
    ) -> Self {
        Self {
            http_client: Client::new(),
            config,
            teams_collection: teams_collection.into(),
            admins_collection: admins_collection.into(),
        }
    }

    fn endpoint(&self, base: &str, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = Url::parse(base)
            .map_err(|e| BackendError::transport(format!("invalid endpoint {}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| BackendError::transport(format!("endpoint {} cannot take a path", base)))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }

    pub(crate) fn document_url(&self, collection: &str, document_id: &str) -> Result<Url, BackendError> {
        self.endpoint(
            &self.config.firestore_base,
            &[
                "projects",
                self.config.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                collection,
                document_id,
            ],
        )
    }

    pub(crate) fn sign_up_url(&self) -> Result<Url, BackendError> {
        self.endpoint(&self.config.auth_base, &["accounts:signUp"])
    }

    pub(crate) fn delete_account_url(&self) -> Result<Url, BackendError> {
        self.endpoint(&self.config.auth_base, &["accounts:delete"])
    }

    /// Create or overwrite a document. With `must_not_exist` the write fails if it is already there.
    async fn write_document(
        &self,
        collection: &str,
        document_id: &str,
        fields: &[(&str, &str)],
        id_token: &str,
        must_not_exist: bool,
    ) -> Result<(), BackendError> {
        let mut url = self.document_url(collection, document_id)?;
        if must_not_exist {
            url.query_pairs_mut()
                .append_pair("currentDocument.exists", "false");
        }

        let response = self
            .http_client
            .patch(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", id_token))
            .json(&document_body(fields))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Writing {}/{} failed with {}: {}", collection, document_id, status, body);
            Err(rejection_from_response(status, &body))
        }
    }
}

impl FirebaseBackend {
    /// Claim the team, then write the admin profile. A claimed team is
    /// released again when the profile write fails.
    async fn store_admin_records(
        &self,
        request: &CreateAdminRequest,
        session: &SignUpResponse,
    ) -> Result<(), BackendError> {
        let department = request.department.as_str();

        // Claim the team first so a concurrent sign-up cannot take it over
        self.write_document(
            &self.teams_collection,
            &request.team_id,
            &[
                ("teamId", request.team_id.as_str()),
                ("adminUid", session.local_id.as_str()),
                ("adminEmail", request.email.as_str()),
                ("adminName", request.full_name.as_str()),
                ("department", department),
            ],
            &session.id_token,
            true,
        )
        .await?;

        let profile = self
            .write_document(
                &self.admins_collection,
                &session.local_id,
                &[
                    ("fullName", request.full_name.as_str()),
                    ("email", request.email.as_str()),
                    ("phone", request.phone.as_str()),
                    ("department", department),
                    ("teamId", request.team_id.as_str()),
                    ("role", "admin"),
                ],
                &session.id_token,
                false,
            )
            .await;

        if profile.is_err() {
            if let Err(e) = self
                .delete_document(&self.teams_collection, &request.team_id, &session.id_token)
                .await
            {
                error!("Could not release team {}: {}", request.team_id, e);
            }
        }
        profile
    }

    async fn delete_document(
        &self,
        collection: &str,
        document_id: &str,
        id_token: &str,
    ) -> Result<(), BackendError> {
        let response = self
            .http_client
            .delete(self.document_url(collection, document_id)?)
            .header("Authorization", format!("Bearer {}", id_token))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(rejection_from_response(status, &body))
        }
    }

    /// Remove the auth user a failed sign-up left behind
    async fn delete_account(&self, id_token: &str) -> Result<(), BackendError> {
        let response = self
            .http_client
            .post(self.delete_account_url()?)
            .header("Content-Type", "application/json")
            .json(&json!({ "idToken": id_token }))
            .send()
            .await?;

        if response.status().is_success() {
            info!("Removed orphaned auth account");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(rejection_from_response(status, &body))
        }
    }
}

#[async_trait(?Send)]
impl SignupBackend for FirebaseBackend {
    #[instrument(skip(self), err)]
    async fn document_exists(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<bool, BackendError> {
        let url = self.document_url(collection, document_id)?;
        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(true)
        } else if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!("Document lookup returned {}: {}", status, body);
            Err(BackendError::transport(format!(
                "document lookup returned {}",
                status
            )))
        }
    }

    #[instrument(skip(self, request), fields(team_id = %request.team_id), err)]
    async fn create_admin_account(
        &self,
        request: CreateAdminRequest,
    ) -> Result<AdminAccount, BackendError> {
        info!("Creating admin account for {}", request.email);

        let response = self
            .http_client
            .post(self.sign_up_url()?)
            .header("Content-Type", "application/json")
            .json(&json!({
                "email": request.email,
                "password": request.password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(rejection_from_response(status, &body));
        }

        let body = response.text().await?;
        let session: SignUpResponse = serde_json::from_str(&body)?;

        if let Err(e) = self.store_admin_records(&request, &session).await {
            warn!(
                "Rolling back account {} after failed sign-up: {}",
                session.local_id, e
            );
            if let Err(rollback) = self.delete_account(&session.id_token).await {
                error!(
                    "Could not remove account {} after failed sign-up: {}",
                    session.local_id, rollback
                );
            }
            return Err(e);
        }

        info!("Admin account {} created for team {}", session.local_id, request.team_id);

        Ok(AdminAccount {
            uid: session.local_id,
            email: request.email,
            full_name: request.full_name,
            department: request.department,
            team_id: request.team_id,
        })
    }
}

/// Firestore typed-value document body with string fields
pub(crate) fn document_body(fields: &[(&str, &str)]) -> Value {
    let fields: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| (name.to_string(), json!({ "stringValue": value })))
        .collect();
    json!({ "fields": fields })
}

/// Pull a machine-readable code out of a Firebase error body.
/// Identity Toolkit puts it at the start of `message` ("WEAK_PASSWORD : ..."),
/// Firestore puts it in `status`.
fn error_code(body: &ErrorBody) -> Option<String> {
    let head = body.message.split(" : ").next().unwrap_or_default().trim();
    if !head.is_empty() && head.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
        return Some(head.to_string());
    }
    body.status.clone().filter(|status| !status.is_empty())
}

fn friendly_message(code: &str) -> String {
    match code {
        "EMAIL_EXISTS" => "This email is already registered. Please sign in instead.".to_string(),
        "INVALID_EMAIL" => "Please enter a valid email address".to_string(),
        "WEAK_PASSWORD" => "The password is too weak. Please choose a stronger one.".to_string(),
        "OPERATION_NOT_ALLOWED" => {
            "Email sign-up is currently disabled. Please contact support.".to_string()
        }
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many attempts. Please wait a moment and try again.".to_string()
        }
        "ALREADY_EXISTS" => TEAM_ID_TAKEN.to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn rejection_from_response(status: StatusCode, body: &str) -> BackendError {
    match serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| error_code(&envelope.error))
    {
        Some(code) => BackendError::Rejected {
            message: Some(friendly_message(&code)),
            code,
        },
        None => BackendError::Rejected {
            code: status.as_str().to_string(),
            message: None,
        },
    }
}
