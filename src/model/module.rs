use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::shape::coerce_number;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A learning module. Pricing fields arrive as numbers or numeric strings
/// depending on the endpoint, so they stay loosely typed with coercing
/// accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub discount_price: Option<Value>,
    #[serde(default)]
    pub effective_price: Option<Value>,
    #[serde(default)]
    pub is_free: Option<bool>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration_hours: Option<i64>,
    #[serde(default)]
    pub lessons_count: Option<i64>,
    #[serde(default)]
    pub instructor_id: Option<String>,
    #[serde(default)]
    pub instructor: Option<InstructorSummary>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default)]
    pub learning_outcomes: Option<Vec<String>>,
    #[serde(default)]
    pub published_at: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Module {
    /// The instant a module is ordered by: publication time, falling back
    /// to creation time. `None` when neither parses.
    pub fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_at.as_deref().unwrap_or(&self.created_at);
        parse_timestamp(raw)
    }

    /// Price after discounts, coerced out of whichever loosely-typed field
    /// the endpoint populated.
    pub fn price_value(&self) -> Option<f64> {
        [&self.effective_price, &self.discount_price, &self.price]
            .into_iter()
            .flatten()
            .find_map(coerce_number)
    }
}

/// Accepts RFC 3339 and the backend's `Y-m-d H:M:S` rendering.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleStatistics {
    pub total_enrollments: i64,
    pub active_learners: i64,
    pub completion_rate: f64,
    pub average_progress: f64,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleEnrollment {
    pub id: String,
    pub user_id: String,
    pub module_id: String,
    #[serde(default)]
    pub progress: Option<Value>,
    pub status: String,
    pub enrolled_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub user: Option<super::ApiUser>,
}

impl ModuleEnrollment {
    pub fn progress_value(&self) -> Option<f64> {
        self.progress.as_ref().and_then(coerce_number)
    }
}

/// Create/update payload for a module.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleUpsert {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_outcomes: Option<Vec<String>>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn module(published_at: Option<&str>, created_at: &str) -> Module {
        serde_json::from_value(json!({
            "id": "m1",
            "title": "Intro",
            "slug": "intro",
            "status": "published",
            "published_at": published_at,
            "created_at": created_at,
        }))
        .unwrap()
    }

    #[test]
    fn effective_timestamp_prefers_published_at() {
        let module = module(Some("2024-03-01T00:00:00Z"), "2024-01-01T00:00:00Z");
        assert_eq!(
            module.effective_timestamp(),
            parse_timestamp("2024-03-01T00:00:00Z")
        );
    }

    #[test]
    fn effective_timestamp_falls_back_to_created_at() {
        let module = module(None, "2024-01-02 10:30:00");
        assert!(module.effective_timestamp().is_some());
    }

    #[test]
    fn unparsable_timestamp_is_none() {
        let module = module(Some("soon"), "never");
        assert_eq!(module.effective_timestamp(), None);
    }

    #[test]
    fn price_coerces_strings_and_prefers_effective() {
        let module: Module = serde_json::from_value(json!({
            "id": "m1",
            "title": "Intro",
            "slug": "intro",
            "status": "published",
            "created_at": "2024-01-01T00:00:00Z",
            "price": "19.99",
            "effective_price": 9.99,
        }))
        .unwrap();
        assert_eq!(module.price_value(), Some(9.99));
    }
}
