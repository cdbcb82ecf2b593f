use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::model::{ApiResponse, ModuleProgress};

#[derive(Debug, Clone, Default, Serialize)]
pub struct LeaderboardParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

pub struct ProgressApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn progress(&self) -> ProgressApi<'_> {
        ProgressApi { client: self }
    }
}

impl ProgressApi<'_> {
    pub async fn module(&self, slug: &str) -> ClientResult<ApiResponse<ModuleProgress>> {
        self.client.get(&format!("modules/{slug}/progress")).await
    }

    /// Loosely typed on purpose: the stats envelope varies by backend
    /// version, so callers unwrap it with the shape normalizer.
    pub async fn stats(&self) -> ClientResult<Value> {
        self.client.get("progress/stats").await
    }

    pub async fn leaderboard(&self, params: &LeaderboardParams) -> ClientResult<Value> {
        self.client.get_query("progress/leaderboard", params).await
    }
}
