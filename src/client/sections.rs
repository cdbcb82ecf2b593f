use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::model::{ApiResponse, ModuleSection, SectionProgress, SectionUpsert};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListSectionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

pub struct SectionsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn sections(&self) -> SectionsApi<'_> {
        SectionsApi { client: self }
    }
}

impl SectionsApi<'_> {
    pub async fn list(
        &self,
        module_slug: &str,
        params: &ListSectionsParams,
    ) -> ClientResult<ApiResponse<Vec<ModuleSection>>> {
        self.client
            .get_query(&format!("modules/{module_slug}/sections"), params)
            .await
    }

    pub async fn get(
        &self,
        module_slug: &str,
        section_id: &str,
    ) -> ClientResult<ApiResponse<ModuleSection>> {
        self.client
            .get(&format!("modules/{module_slug}/sections/{section_id}"))
            .await
    }

    pub async fn create(
        &self,
        module_slug: &str,
        payload: &SectionUpsert,
    ) -> ClientResult<ApiResponse<ModuleSection>> {
        self.client
            .post(&format!("modules/{module_slug}/sections"), payload)
            .await
    }

    pub async fn update(
        &self,
        module_slug: &str,
        section_id: &str,
        payload: &SectionUpsert,
    ) -> ClientResult<ApiResponse<ModuleSection>> {
        self.client
            .put(
                &format!("modules/{module_slug}/sections/{section_id}"),
                payload,
            )
            .await
    }

    pub async fn remove(
        &self,
        module_slug: &str,
        section_id: &str,
    ) -> ClientResult<ApiResponse<Value>> {
        self.client
            .delete(&format!("modules/{module_slug}/sections/{section_id}"))
            .await
    }

    pub async fn mark_complete(&self, section_id: &str) -> ClientResult<ApiResponse<Value>> {
        self.client
            .post(
                &format!("sections/{section_id}/complete"),
                &serde_json::json!({}),
            )
            .await
    }

    pub async fn progress(&self, section_id: &str) -> ClientResult<ApiResponse<SectionProgress>> {
        self.client
            .get(&format!("sections/{section_id}/progress"))
            .await
    }
}
