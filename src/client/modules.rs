use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult, PagingParams};
use crate::model::{
    ApiResponse, Module, ModuleEnrollment, ModuleStatistics, ModuleUpsert, PaginatedResource,
};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListModulesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchModulesParams {
    pub q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FindByTagsPayload {
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
struct AssignInstructorPayload<'a> {
    instructor_id: Option<&'a str>,
}

pub struct ModulesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn modules(&self) -> ModulesApi<'_> {
        ModulesApi { client: self }
    }
}

impl ModulesApi<'_> {
    pub async fn list_published(
        &self,
        params: &ListModulesParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<Module>>> {
        self.client.get_query("modules/published", params).await
    }

    pub async fn search(
        &self,
        params: &SearchModulesParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<Module>>> {
        self.client.get_query("modules/search", params).await
    }

    pub async fn featured(&self, limit: Option<i64>) -> ClientResult<ApiResponse<Vec<Module>>> {
        match limit {
            Some(limit) => {
                self.client
                    .get_query("modules/featured", &[("limit", limit)])
                    .await
            }
            None => self.client.get("modules/featured").await,
        }
    }

    pub async fn find_by_tags(
        &self,
        payload: &FindByTagsPayload,
    ) -> ClientResult<ApiResponse<PaginatedResource<Module>>> {
        self.client.post("modules/find-by-tags", payload).await
    }

    pub async fn list_accessible(
        &self,
        params: &PagingParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<Module>>> {
        self.client.get_query("modules/accessible", params).await
    }

    pub async fn list_locked(
        &self,
        params: &PagingParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<Module>>> {
        self.client.get_query("modules/locked", params).await
    }

    pub async fn list(
        &self,
        params: &ListModulesParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<Module>>> {
        self.client.get_query("modules", params).await
    }

    pub async fn create(&self, payload: &ModuleUpsert) -> ClientResult<ApiResponse<Module>> {
        self.client.post("modules", payload).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> ClientResult<ApiResponse<Module>> {
        self.client.get(&format!("modules/{slug}")).await
    }

    pub async fn update(
        &self,
        slug: &str,
        payload: &ModuleUpsert,
    ) -> ClientResult<ApiResponse<Module>> {
        self.client.put(&format!("modules/{slug}"), payload).await
    }

    pub async fn remove(&self, slug: &str) -> ClientResult<ApiResponse<Value>> {
        self.client.delete(&format!("modules/{slug}")).await
    }

    pub async fn enroll(&self, slug: &str) -> ClientResult<ApiResponse<ModuleEnrollment>> {
        self.client
            .post(&format!("modules/{slug}/enroll"), &serde_json::json!({}))
            .await
    }

    pub async fn enrollments(
        &self,
        slug: &str,
        params: &PagingParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<ModuleEnrollment>>> {
        self.client
            .get_query(&format!("modules/{slug}/enrollments"), params)
            .await
    }

    pub async fn statistics(&self, slug: &str) -> ClientResult<ApiResponse<ModuleStatistics>> {
        self.client.get(&format!("modules/{slug}/statistics")).await
    }

    pub async fn assign_instructor(
        &self,
        slug: &str,
        instructor_id: Option<&str>,
    ) -> ClientResult<ApiResponse<Module>> {
        self.client
            .put(
                &format!("modules/{slug}/assign-instructor"),
                &AssignInstructorPayload { instructor_id },
            )
            .await
    }
}
