use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::model::{ApiResponse, ApiUser};

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordPayload {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordPayload {
    pub token: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: ApiUser,
    pub token: String,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Registers an account and begins a session with the issued token.
    pub async fn register(
        &self,
        payload: &RegisterPayload,
    ) -> ClientResult<ApiResponse<AuthResponse>> {
        let response: ApiResponse<AuthResponse> =
            self.client.post_noauth("auth/register", payload).await?;
        self.client.session().set_token(&response.data.token)?;
        Ok(response)
    }

    /// Logs in and stores the bearer token in the session context.
    pub async fn login(&self, payload: &LoginPayload) -> ClientResult<ApiResponse<AuthResponse>> {
        let response: ApiResponse<AuthResponse> =
            self.client.post_noauth("auth/login", payload).await?;
        self.client.session().set_token(&response.data.token)?;
        Ok(response)
    }

    pub async fn me(&self) -> ClientResult<ApiResponse<ApiUser>> {
        self.client.get("auth/user").await
    }

    /// Ends the session server-side, then drops the local token even if the
    /// backend call reported a stale session.
    pub async fn logout(&self) -> ClientResult<ApiResponse<Value>> {
        let result = self
            .client
            .post("auth/logout", &serde_json::json!({}))
            .await;
        self.client.session().clear()?;
        result
    }

    pub async fn forgot_password(
        &self,
        payload: &ForgotPasswordPayload,
    ) -> ClientResult<ApiResponse<Value>> {
        self.client.post_noauth("auth/forgot-password", payload).await
    }

    pub async fn reset_password(
        &self,
        payload: &ResetPasswordPayload,
    ) -> ClientResult<ApiResponse<Value>> {
        self.client.post_noauth("auth/reset-password", payload).await
    }
}
