use serde::{Deserialize, Serialize};

/// Standard response wrapper: `{ success, message, data }`. Not every
/// endpoint honors it, which is why [`crate::utils::shape::extract_data`]
/// exists for the loosely-typed reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Graceful stand-in for endpoints the backend has not deployed.
    pub fn empty(data: T) -> Self {
        Self {
            success: true,
            message: "Resource not available".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub last_page: i64,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            total: 0,
            per_page: 0,
            current_page: 1,
            last_page: 1,
            from: None,
            to: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResource<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PaginationMeta,
    #[serde(default)]
    pub links: PaginationLinks,
}

impl<T> Default for PaginatedResource<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: PaginationMeta::default(),
            links: PaginationLinks::default(),
        }
    }
}
