use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizProgress {
    pub completed_quizzes: i64,
    pub total_quizzes: i64,
    pub score: f64,
}

/// Per-section progress, including the extended lesson-step counters newer
/// backend versions expose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionProgress {
    pub section_id: String,
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub quiz_progress: Option<QuizProgress>,
    #[serde(default)]
    pub lesson_steps_completed: Option<i64>,
    #[serde(default)]
    pub total_lesson_steps: Option<i64>,
    #[serde(default)]
    pub content_viewed: Option<bool>,
    #[serde(default)]
    pub content_viewed_at: Option<String>,
    #[serde(default)]
    pub points_earned: Option<i64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub can_access: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleProgress {
    pub module_id: String,
    pub module_slug: String,
    #[serde(default)]
    pub enrollment_id: Option<String>,
    pub progress_percentage: f64,
    pub completed_sections: i64,
    pub total_sections: i64,
    #[serde(default)]
    pub sections: Vec<SectionProgress>,
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
}
