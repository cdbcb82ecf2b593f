//! Student dashboard insight aggregation.
//!
//! The dashboard fans out several loosely-typed reads (points,
//! achievements, progress stats, leaderboard, optionally the learning
//! path). Requests run concurrently and resolve independently: one failure
//! never aborts the others, it just leaves that panel on its empty state.
//! Payloads pass through the shape normalizer before use because these are
//! the endpoints with the most envelope drift.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Utc};
use serde_json::Value;

use crate::client::{ApiClient, ClientResult, PagingParams, progress::LeaderboardParams};
use crate::error::log_error;
use crate::model::Module;
use crate::utils::shape::{extract_data, find_numeric_value, has_meaningful_data};

/// Key candidates for the points metric, in lookup order.
pub const POINT_TOTAL_KEYS: [&str; 5] =
    ["total_points", "points", "points_total", "score", "value"];

#[derive(Debug, Default)]
pub struct DashboardInsights {
    points_summary: Option<Value>,
    achievements: Vec<Value>,
    unlocked_achievements: Option<Value>,
    progress_stats: Option<Value>,
    leaderboard: Option<Value>,
    learning_path: Vec<Module>,
    accessible_modules: Vec<Module>,
    locked_modules: Vec<Module>,
}

impl DashboardInsights {
    pub async fn load(client: &ApiClient, learning_path_enabled: bool) -> Self {
        let achievements_paging = PagingParams::per_page(20);
        let leaderboard_params = LeaderboardParams {
            limit: Some(10),
            period: Some("month".to_string()),
        };
        let points_api = client.points();
        let achievements_api = client.achievements();
        let progress_api = client.progress();
        let (points, achievements, unlocked, stats, leaderboard) = tokio::join!(
            points_api.summary(),
            achievements_api.list(&achievements_paging),
            achievements_api.unlocked(),
            progress_api.stats(),
            progress_api.leaderboard(&leaderboard_params),
        );

        let mut insights = Self {
            points_summary: resolve_optional(points),
            achievements: resolve_records(achievements),
            unlocked_achievements: resolve_unlocked(unlocked),
            progress_stats: resolve_optional(stats),
            leaderboard: resolve_optional(leaderboard),
            ..Default::default()
        };

        if learning_path_enabled {
            let accessible_paging = PagingParams::per_page(20);
            let locked_paging = PagingParams::per_page(20);
            let learning_path_api = client.learning_path();
            let (path, accessible, locked) = tokio::join!(
                learning_path_api.list(),
                learning_path_api.accessible(&accessible_paging),
                learning_path_api.locked(&locked_paging),
            );

            insights.learning_path = resolve_modules(path);
            insights.accessible_modules = resolve_modules(accessible);
            insights.locked_modules = resolve_modules(locked);
        }

        insights
    }

    /// Total points earned, from whichever key the backend used for it.
    pub fn total_points(&self) -> Option<f64> {
        self.points_summary
            .as_ref()
            .and_then(|summary| find_numeric_value(summary, &POINT_TOTAL_KEYS))
    }

    pub fn achievements(&self) -> &[Value] {
        &self.achievements
    }

    pub fn unlocked_achievement_items(&self) -> Vec<&Value> {
        match &self.unlocked_achievements {
            Some(Value::Array(items)) => items.iter().filter(|item| item.is_object()).collect(),
            Some(record) if record.as_object().is_some_and(|map| !map.is_empty()) => {
                vec![record]
            }
            _ => Vec::new(),
        }
    }

    pub fn progress_stats(&self) -> Option<&Value> {
        self.progress_stats
            .as_ref()
            .filter(|stats| has_meaningful_data(stats))
    }

    pub fn leaderboard(&self) -> Option<&Value> {
        self.leaderboard
            .as_ref()
            .filter(|board| has_meaningful_data(board))
    }

    pub fn learning_path(&self) -> &[Module] {
        &self.learning_path
    }

    pub fn accessible_modules(&self) -> &[Module] {
        &self.accessible_modules
    }

    pub fn locked_modules(&self) -> &[Module] {
        &self.locked_modules
    }
}

fn resolve_optional(result: ClientResult<Value>) -> Option<Value> {
    match result {
        Ok(value) => {
            let resolved = extract_data(&value);
            (!resolved.is_null()).then(|| resolved.clone())
        }
        Err(e) => {
            log_error(&e);
            None
        }
    }
}

fn resolve_records(result: ClientResult<Value>) -> Vec<Value> {
    match result {
        Ok(value) => match extract_data(&value) {
            Value::Array(items) => items
                .iter()
                .filter(|item| item.is_object())
                .cloned()
                .collect(),
            record @ Value::Object(_) => vec![record.clone()],
            _ => Vec::new(),
        },
        Err(e) => {
            log_error(&e);
            Vec::new()
        }
    }
}

fn resolve_unlocked(result: ClientResult<Value>) -> Option<Value> {
    match result {
        Ok(value) => match extract_data(&value) {
            Value::Array(items) => Some(Value::Array(
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .cloned()
                    .collect(),
            )),
            Value::Null => None,
            resolved => Some(resolved.clone()),
        },
        Err(e) => {
            log_error(&e);
            None
        }
    }
}

fn resolve_modules(result: ClientResult<Value>) -> Vec<Module> {
    match result {
        Ok(value) => match extract_data(&value) {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        },
        Err(e) => {
            log_error(&e);
            Vec::new()
        }
    }
}

/// Presentation order: oldest first, missing timestamps last, ties on
/// title.
pub fn sort_modules_oldest_first(modules: &mut [Module]) {
    modules.sort_by(|a, b| compare_timestamps(a, b).then_with(|| a.title.cmp(&b.title)));
}

/// The newest `count` modules.
pub fn recent_modules(modules: &[Module], count: usize) -> Vec<&Module> {
    let mut ordered: Vec<&Module> = modules.iter().collect();
    ordered.sort_by(|a, b| compare_timestamps(b, a).then_with(|| a.title.cmp(&b.title)));
    ordered.truncate(count);
    ordered
}

/// How many modules were published in the same month as `now`.
pub fn new_this_month(modules: &[Module], now: DateTime<Utc>) -> usize {
    modules
        .iter()
        .filter_map(Module::effective_timestamp)
        .filter(|published| published.month() == now.month() && published.year() == now.year())
        .count()
}

fn compare_timestamps(a: &Module, b: &Module) -> Ordering {
    match (a.effective_timestamp(), b.effective_timestamp()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
