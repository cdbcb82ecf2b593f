//! Lesson step content model.
//!
//! A module section carries its teaching content either as a raw legacy
//! HTML/text string or as a versioned JSON envelope of ordered steps. This
//! module owns that envelope and the upgrade path from legacy content.

mod step;
pub use step::{
    LESSON_SCHEMA_VERSION, LessonContent, LessonStep, LessonStepDraft, LessonStepType,
};

mod codec;
pub use codec::{
    create_empty_lesson_step, new_step_id, normalize_lesson_step, parse_lesson_content,
    parse_lesson_steps, resolve_lesson_steps, serialize_lesson_steps,
};
