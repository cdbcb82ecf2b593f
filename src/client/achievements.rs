use serde_json::Value;

use super::{ApiClient, ClientResult, PagingParams};

pub struct AchievementsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn achievements(&self) -> AchievementsApi<'_> {
        AchievementsApi { client: self }
    }
}

impl AchievementsApi<'_> {
    /// Loosely typed: some deployments wrap the list in `achievements`,
    /// some in the standard paginated envelope.
    pub async fn list(&self, params: &PagingParams) -> ClientResult<Value> {
        self.client.get_query("achievements", params).await
    }

    pub async fn unlocked(&self) -> ClientResult<Value> {
        self.client.get("achievements/unlocked").await
    }
}
