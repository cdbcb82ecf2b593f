use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckItem {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    #[serde(default)]
    pub checks: HashMap<String, HealthCheckItem>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub cache_stats: Option<Value>,
}
