use serde_json::Value;

use super::{ApiClient, ClientResult, PagingParams};
use crate::model::{ApiResponse, Module, PaginatedResource};

/// Learning-path reads with "endpoint not deployed" tolerance: older
/// backends predate these routes, so a 404 resolves to an empty payload
/// instead of an error. Results stay loosely typed for the dashboard's
/// shape normalizer.
pub struct LearningPathApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn learning_path(&self) -> LearningPathApi<'_> {
        LearningPathApi { client: self }
    }
}

impl LearningPathApi<'_> {
    pub async fn list(&self) -> ClientResult<Value> {
        self.client
            .get_or_not_found::<Value, ()>("learning-path", None, empty_list_response)
            .await
    }

    pub async fn accessible(&self, params: &PagingParams) -> ClientResult<Value> {
        self.client
            .get_or_not_found("modules/accessible", Some(params), empty_page_response)
            .await
    }

    pub async fn locked(&self, params: &PagingParams) -> ClientResult<Value> {
        self.client
            .get_or_not_found("modules/locked", Some(params), empty_page_response)
            .await
    }
}

fn empty_list_response() -> Value {
    serde_json::to_value(ApiResponse::empty(Vec::<Module>::new()))
        .expect("empty response serializes")
}

fn empty_page_response() -> Value {
    serde_json::to_value(ApiResponse::empty(PaginatedResource::<Module>::default()))
        .expect("empty response serializes")
}
