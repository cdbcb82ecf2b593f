use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::model::{ActivityEntry, ActivityStatistics, ApiResponse, PaginatedResource};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListActivitiesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CleanupActivitiesPayload {
    pub days: i64,
}

pub struct ActivitiesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn activities(&self) -> ActivitiesApi<'_> {
        ActivitiesApi { client: self }
    }
}

impl ActivitiesApi<'_> {
    pub async fn list(
        &self,
        params: &ListActivitiesParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<ActivityEntry>>> {
        self.client.get_query("activities", params).await
    }

    pub async fn my_activities(
        &self,
        params: &ListActivitiesParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<ActivityEntry>>> {
        self.client.get_query("activities/my", params).await
    }

    pub async fn user_activities(
        &self,
        user_id: &str,
        params: &ListActivitiesParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<ActivityEntry>>> {
        self.client
            .get_query(&format!("activities/user/{user_id}"), params)
            .await
    }

    pub async fn statistics(&self) -> ClientResult<ApiResponse<ActivityStatistics>> {
        self.client.get("activities/statistics").await
    }

    pub async fn cleanup(&self, days: i64) -> ClientResult<ApiResponse<Value>> {
        self.client
            .delete_body("activities/cleanup", &CleanupActivitiesPayload { days })
            .await
    }
}
