mod activity;
pub use activity::{ActivityEntry, ActivityStatistics};

mod envelope;
pub use envelope::{ApiResponse, PaginatedResource, PaginationLinks, PaginationMeta};

mod health;
pub use health::{HealthCheck, HealthCheckItem};

mod module;
pub use module::{InstructorSummary, Module, ModuleEnrollment, ModuleStatistics, ModuleUpsert};

mod progress;
pub use progress::{ModuleProgress, QuizProgress, SectionProgress};

mod quiz;
pub use quiz::{ModuleQuiz, QuizSubmission, QuizUpsert};

mod section;
pub use section::{ModuleSection, SectionUpsert};

mod user;
pub use user::{ApiUser, User, UserRole};
