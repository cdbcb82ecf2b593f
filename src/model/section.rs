use serde::{Deserialize, Serialize};

use crate::lesson::{LessonStep, LessonStepDraft, resolve_lesson_steps, serialize_lesson_steps};

/// A subdivision of a module. Lesson content arrives in up to two forms:
/// the raw `content` string (legacy text or the versioned JSON envelope)
/// and the structured `lesson_steps` array newer backends return alongside
/// it. [`ModuleSection::resolved_steps`] reconciles the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order_number: Option<i64>,
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub module_id: Option<String>,
    #[serde(default)]
    pub has_quizzes: Option<bool>,
    #[serde(default)]
    pub total_quiz_points: Option<i64>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub quizzes: Option<Vec<super::ModuleQuiz>>,
    #[serde(default)]
    pub lesson_steps: Option<Vec<LessonStepDraft>>,
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl ModuleSection {
    /// Canonical ordered step list for display: structured steps win,
    /// legacy `content` is the fallback.
    pub fn resolved_steps(&self) -> Vec<LessonStep> {
        resolve_lesson_steps(self.lesson_steps.as_deref(), self.content.as_deref())
    }
}

/// Create/update payload for a section. Steps are persisted twice over:
/// serialized into `content` (the write-path envelope) and as the
/// structured array for backends that store it directly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionUpsert {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_steps: Option<Vec<LessonStep>>,
}

impl SectionUpsert {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Attaches the step list in both representations.
    pub fn with_steps(mut self, steps: Vec<LessonStep>) -> Self {
        self.content = Some(serialize_lesson_steps(&steps));
        self.lesson_steps = Some(steps);
        self
    }
}
