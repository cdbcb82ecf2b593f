use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::model::{ApiResponse, ApiUser, PaginatedResource};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RolePayload {
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }
}

impl UsersApi<'_> {
    pub async fn list(
        &self,
        params: &ListUsersParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<ApiUser>>> {
        self.client.get_query("users", params).await
    }

    pub async fn create(&self, payload: &CreateUserPayload) -> ClientResult<ApiResponse<ApiUser>> {
        self.client.post("users", payload).await
    }

    pub async fn create_instructor(
        &self,
        payload: &CreateUserPayload,
    ) -> ClientResult<ApiResponse<ApiUser>> {
        self.client.post("instructors", payload).await
    }

    pub async fn get(&self, user_id: &str) -> ClientResult<ApiResponse<ApiUser>> {
        self.client.get(&format!("users/{user_id}")).await
    }

    pub async fn update(
        &self,
        user_id: &str,
        payload: &UpdateUserPayload,
    ) -> ClientResult<ApiResponse<ApiUser>> {
        self.client.put(&format!("users/{user_id}"), payload).await
    }

    pub async fn assign_role(
        &self,
        user_id: &str,
        role: &str,
    ) -> ClientResult<ApiResponse<Value>> {
        self.client
            .post(
                &format!("users/{user_id}/roles"),
                &RolePayload {
                    role: role.to_string(),
                },
            )
            .await
    }

    pub async fn roles(&self, user_id: &str) -> ClientResult<ApiResponse<RolesResponse>> {
        self.client.get(&format!("users/{user_id}/roles")).await
    }

    pub async fn remove_role(&self, user_id: &str, role: &str) -> ClientResult<ApiResponse<Value>> {
        self.client
            .delete(&format!("users/{user_id}/roles/{role}"))
            .await
    }

    pub async fn remove(&self, user_id: &str) -> ClientResult<ApiResponse<Value>> {
        self.client.delete(&format!("users/{user_id}")).await
    }
}
