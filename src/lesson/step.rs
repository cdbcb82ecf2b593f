use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const LESSON_SCHEMA_VERSION: u32 = 1;

/// What a step asks of the learner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStepType {
    #[default]
    Instruction,
    Practice,
    Media,
}

impl LessonStepType {
    /// Decodes a wire tag. Unrecognized tags land on `Instruction`; the
    /// backend never validated this field, so stray values do occur.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "instruction" => Self::Instruction,
            "practice" => Self::Practice,
            "media" => Self::Media,
            other => {
                tracing::debug!(tag = other, "unrecognized lesson step type");
                Self::Instruction
            }
        }
    }
}

impl std::fmt::Display for LessonStepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instruction => write!(f, "instruction"),
            Self::Practice => write!(f, "practice"),
            Self::Media => write!(f, "media"),
        }
    }
}

/// One instructional unit within a section. Every field is populated once a
/// step has passed through [`crate::lesson::normalize_lesson_step`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonStep {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: LessonStepType,
    #[serde(rename = "mediaUrl", default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// A step-like object as the backend actually sends it: any subset of fields
/// may be missing, the type tag is an arbitrary string. Deserialization is
/// total; fields of the wrong shape decode as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LessonStepDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "mediaUrl", skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl<'de> Deserialize<'de> for LessonStepDraft {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl LessonStepDraft {
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        Self {
            id: id_field(map.get("id")),
            title: string_field(map.get("title")),
            content: string_field(map.get("content")),
            kind: string_field(map.get("type")),
            media_url: string_field(map.get("mediaUrl")),
        }
    }
}

impl From<&LessonStep> for LessonStepDraft {
    fn from(step: &LessonStep) -> Self {
        Self {
            id: Some(step.id.clone()),
            title: Some(step.title.clone()),
            content: Some(step.content.clone()),
            kind: Some(step.kind.to_string()),
            media_url: step.media_url.clone(),
        }
    }
}

// Numeric ids show up in older rows; keep them, stringified.
fn id_field(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Number(n)) => Some(n.to_string()),
        other => string_field(other),
    }
}

// Fields of the wrong shape decode as absent.
fn string_field(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Persisted envelope for a section's steps. Version 1 is the only version
/// in the wild; the field exists so the format can evolve without another
/// sniffing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonContent {
    pub version: u32,
    pub steps: Vec<LessonStep>,
}
