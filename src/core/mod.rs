pub mod engine;
pub mod pipeline;

pub use crate::domain::model::Record;
pub use crate::domain::ports::{
    ConfigProvider, ConversationLog, CourseSource, Pipeline, Storage, ToRecord,
};
pub use crate::utils::error::Result;
