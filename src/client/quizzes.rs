use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult, PagingParams};
use crate::model::{ApiResponse, ModuleQuiz, PaginatedResource, QuizSubmission, QuizUpsert};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuizzesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
}

pub struct QuizzesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn quizzes(&self) -> QuizzesApi<'_> {
        QuizzesApi { client: self }
    }
}

impl QuizzesApi<'_> {
    pub async fn list(
        &self,
        params: &PagingParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<ModuleQuiz>>> {
        self.client.get_query("quizzes", params).await
    }

    pub async fn list_for_section(
        &self,
        section_id: &str,
        params: &ListQuizzesParams,
    ) -> ClientResult<ApiResponse<Vec<ModuleQuiz>>> {
        self.client
            .get_query(&format!("sections/{section_id}/quizzes"), params)
            .await
    }

    pub async fn list_for_section_paginated(
        &self,
        section_id: &str,
        params: &ListQuizzesParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<ModuleQuiz>>> {
        self.client
            .get_query(&format!("sections/{section_id}/quizzes/paginated"), params)
            .await
    }

    pub async fn create(&self, payload: &QuizUpsert) -> ClientResult<ApiResponse<ModuleQuiz>> {
        self.client.post("quizzes", payload).await
    }

    pub async fn get(&self, quiz_id: &str) -> ClientResult<ApiResponse<ModuleQuiz>> {
        self.client.get(&format!("quizzes/{quiz_id}")).await
    }

    pub async fn update(
        &self,
        quiz_id: &str,
        payload: &QuizUpsert,
    ) -> ClientResult<ApiResponse<ModuleQuiz>> {
        self.client.put(&format!("quizzes/{quiz_id}"), payload).await
    }

    pub async fn remove(&self, quiz_id: &str) -> ClientResult<ApiResponse<Value>> {
        self.client.delete(&format!("quizzes/{quiz_id}")).await
    }

    pub async fn submit(
        &self,
        quiz_id: &str,
        payload: &QuizSubmission,
    ) -> ClientResult<ApiResponse<Value>> {
        self.client
            .post(&format!("quizzes/{quiz_id}/submit"), payload)
            .await
    }

    pub async fn attempts(
        &self,
        quiz_id: &str,
        params: &PagingParams,
    ) -> ClientResult<ApiResponse<PaginatedResource<Value>>> {
        self.client
            .get_query(&format!("quizzes/{quiz_id}/attempts"), params)
            .await
    }

    pub async fn section_statistics(&self, section_id: &str) -> ClientResult<ApiResponse<Value>> {
        self.client
            .get(&format!("sections/{section_id}/quiz-stats"))
            .await
    }

    pub async fn section_progress(&self, section_id: &str) -> ClientResult<ApiResponse<Value>> {
        self.client
            .get(&format!("sections/{section_id}/quiz-progress"))
            .await
    }
}
