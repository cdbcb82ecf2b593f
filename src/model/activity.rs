use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Audit-log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: i64,
    pub log_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subject_type: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub subject_id: Option<i64>,
    #[serde(default)]
    pub causer_type: Option<String>,
    #[serde(default)]
    pub causer_id: Option<i64>,
    #[serde(default)]
    pub properties: Option<Value>,
    #[serde(default)]
    pub batch_uuid: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub subject: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityStatistics {
    pub total: i64,
    #[serde(default)]
    pub by_type: HashMap<String, i64>,
    #[serde(default)]
    pub by_user: HashMap<String, i64>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
}
