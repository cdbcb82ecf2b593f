use serde_json::Value;

use super::{ApiClient, ClientResult};

pub struct PointsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn points(&self) -> PointsApi<'_> {
        PointsApi { client: self }
    }
}

impl PointsApi<'_> {
    /// Envelope shape varies by backend version; callers unwrap it with the
    /// shape normalizer.
    pub async fn summary(&self) -> ClientResult<Value> {
        self.client.get("points/summary").await
    }
}
