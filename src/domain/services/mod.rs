pub mod catalog;
pub mod intake;
pub mod matcher;
pub mod motivation;
pub mod planner;
pub mod profile;
pub mod schedule;
pub mod search;

pub use catalog::{builtin_catalog, BuiltinCatalog};
pub use intake::intake_questions;
pub use matcher::{recommend_courses, MatchOptions};
pub use motivation::{build_motivation_message, motivate};
pub use planner::build_learning_plan;
pub use profile::{
    build_profile, build_profile_from_payload, LearningProfilePayload, ProfileBuilder,
    ProfileDefaults,
};
pub use schedule::build_weekly_plan;
pub use search::{build_search_query, filter_searched_courses};
