//! Registration endpoints.

use crate::{ApiClient, Result};
use async_trait::async_trait;
use regform_core::{FormValues, UserResponse};
use tracing::info;

/// Path receiving a new registration.
pub const USER_PATH: &str = "/api/user";
/// Path listing registered users.
pub const USERS_PATH: &str = "/api/users";

/// Remote operations the form depends on.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submits the collected form values as a flat JSON object.
    async fn submit_user(&self, values: &FormValues) -> Result<()>;

    /// Fetches every registered user.
    async fn list_users(&self) -> Result<Vec<UserResponse>>;
}

#[async_trait]
impl RegistrationApi for ApiClient {
    async fn submit_user(&self, values: &FormValues) -> Result<()> {
        info!("Submitting registration with {} fields", values.len());
        // The response body is not consumed beyond its existence.
        let _: serde_json::Value = self.post(USER_PATH, values, &[]).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserResponse>> {
        let users: Vec<UserResponse> = self.get(USERS_PATH, &[]).await?;
        info!("Fetched {} users", users.len());
        Ok(users)
    }
}
