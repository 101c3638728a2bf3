pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{JsonCatalog, JsonlConversationLog, LocalStorage};
pub use core::{
    engine::PlannerEngine,
    pipeline::{PlanOutcome, PlanningPipeline, ProfileInput},
};
pub use domain::model::{
    ConversationMessage, Course, IntakeQuestion, LearningPlan, LearningPlanStep, Level, Role,
    SearchQuery, UserProfile, WeeklyPlan,
};
pub use domain::services::{
    build_learning_plan, build_motivation_message, build_profile, build_profile_from_payload,
    build_search_query, build_weekly_plan, filter_searched_courses, intake_questions,
    recommend_courses, MatchOptions,
};
pub use utils::error::{PlannerError, Result};
