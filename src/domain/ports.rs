use crate::domain::model::{ConversationMessage, Course, Record};
use crate::domain::services::ProfileDefaults;
use crate::utils::error::Result;

/// Explicit serialization contract: each entity documents its own key set.
pub trait ToRecord {
    fn to_record(&self) -> Record;
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// 外部提供的課程清單（例如搜尋服務回傳的結果）
pub trait CourseSource {
    fn courses(&self) -> Result<Vec<Course>>;
}

pub trait ConversationLog {
    fn append(&self, message: &ConversationMessage) -> Result<()>;
    fn load(&self) -> Result<Vec<ConversationMessage>>;

    fn extend(&self, messages: &[ConversationMessage]) -> Result<()> {
        for message in messages {
            self.append(message)?;
        }
        Ok(())
    }
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn catalog_path(&self) -> Option<&str>;
    fn course_limit(&self) -> usize;
    fn use_builtin_fallback(&self) -> bool;
    fn profile_defaults(&self) -> ProfileDefaults;

    /// Schedule overrides; `None` keeps the profile's own value.
    fn weekly_time_hours(&self) -> Option<u32> {
        None
    }

    fn timeframe_weeks(&self) -> Option<u32> {
        None
    }

    fn progress_percent(&self) -> Option<u8>;
    fn last_action(&self) -> Option<&str>;
    fn seed(&self) -> Option<u64>;
    fn conversation_log_path(&self) -> Option<&str>;
}

pub trait Pipeline {
    type Input;
    type Output;

    fn extract(&self) -> Result<Self::Input>;
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;
    fn load(&self, output: Self::Output) -> Result<String>;
}
