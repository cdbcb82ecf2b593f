//! Conversion between persisted section content and an ordered step list.
//!
//! Section `content` historically stored raw HTML/text; the structured
//! multi-step envelope came later. Readers therefore have to accept the
//! versioned JSON string, a bare step array, or arbitrary legacy text, and
//! upgrade old data transparently on read. Every function here is total:
//! malformed input falls back to a defined shape, never an error.

use serde_json::Value;

use super::step::{
    LESSON_SCHEMA_VERSION, LessonContent, LessonStep, LessonStepDraft, LessonStepType,
};

pub fn new_step_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fills in every missing field of a step-like object.
pub fn normalize_lesson_step(draft: &LessonStepDraft) -> LessonStep {
    let id = match draft.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => new_step_id(),
    };

    let title = draft
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Lesson step")
        .to_string();

    let kind = draft
        .kind
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(LessonStepType::from_tag)
        .unwrap_or_default();

    LessonStep {
        id,
        title,
        content: draft.content.clone().unwrap_or_default(),
        kind,
        media_url: draft.media_url.clone(),
    }
}

/// Derives the step list from whatever shape the `content` field holds.
pub fn parse_lesson_steps(raw: &Value) -> Vec<LessonStep> {
    if is_blank(raw) {
        return Vec::new();
    }

    match raw {
        Value::Array(items) => normalize_all(items),
        Value::String(text) => parse_content_string(text),
        Value::Object(map) => match map.get("steps") {
            Some(Value::Array(items)) => normalize_all(items),
            _ => vec![legacy_step(raw.to_string())],
        },
        other => vec![legacy_step(other.to_string())],
    }
}

/// Entry point for the section `content` column.
pub fn parse_lesson_content(content: Option<&str>) -> Vec<LessonStep> {
    match content {
        None | Some("") => Vec::new(),
        Some(text) => parse_content_string(text),
    }
}

/// Re-normalizes and wraps the steps in the version-1 envelope. This is
/// always the write-path format; new and edited sections never persist
/// legacy plain text.
pub fn serialize_lesson_steps(steps: &[LessonStep]) -> String {
    let payload = LessonContent {
        version: LESSON_SCHEMA_VERSION,
        steps: steps
            .iter()
            .map(|step| normalize_lesson_step(&step.into()))
            .collect(),
    };
    serde_json::to_string(&payload).expect("lesson content serializes to JSON")
}

/// Blank step for the editor to start authoring from.
pub fn create_empty_lesson_step() -> LessonStep {
    LessonStep {
        id: new_step_id(),
        title: "New lesson step".to_string(),
        content: String::new(),
        kind: LessonStepType::Instruction,
        media_url: None,
    }
}

/// Reconciles the two representations a section may carry. A non-empty
/// structured `lesson_steps` array is authoritative; the raw `content`
/// string is legacy/fallback-only once structured steps exist.
pub fn resolve_lesson_steps(
    lesson_steps: Option<&[LessonStepDraft]>,
    content: Option<&str>,
) -> Vec<LessonStep> {
    match lesson_steps {
        Some(steps) if !steps.is_empty() => steps.iter().map(normalize_lesson_step).collect(),
        _ => parse_lesson_content(content),
    }
}

fn parse_content_string(text: &str) -> Vec<LessonStep> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => normalize_all(&items),
        Ok(Value::Object(map)) => match map.get("steps") {
            Some(Value::Array(items)) => normalize_all(items),
            // parsed, but not a usable envelope: treat like legacy text
            _ => vec![legacy_step(text.to_string())],
        },
        _ => vec![legacy_step(text.to_string())],
    }
}

fn normalize_all(items: &[Value]) -> Vec<LessonStep> {
    items
        .iter()
        .map(|item| normalize_lesson_step(&LessonStepDraft::from_value(item)))
        .collect()
}

/// Single-step wrapper for pre-schema content.
fn legacy_step(content: String) -> LessonStep {
    normalize_lesson_step(&LessonStepDraft {
        title: Some("Lesson content".to_string()),
        content: Some(content),
        kind: Some(LessonStepType::Instruction.to_string()),
        ..Default::default()
    })
}

fn is_blank(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
