use crate::domain::ports::ToRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 實體的明確序列化結果：固定鍵集合的 JSON 映射
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.data.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn into_value(self) -> serde_json::Value {
        serde_json::Value::Object(self.data.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Case-insensitive parse of a level token. Surrounding whitespace is ignored.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            _ => None,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Level::Beginner => 1,
            Level::Intermediate => 2,
            Level::Advanced => 3,
        }
    }

    /// Rank of a raw token; unknown tokens rank as beginner.
    pub fn rank_of(token: &str) -> u8 {
        Self::from_token(token).map(Level::rank).unwrap_or(1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub learning_goal: String,
    pub interested_topics: Vec<String>,
    pub current_level: Level,
    #[serde(default)]
    pub provider_requirements: Vec<String>,
    #[serde(default)]
    pub weekly_time_hours: Option<u32>,
    #[serde(default)]
    pub timeframe_weeks: Option<u32>,
    #[serde(default)]
    pub phased_focus: Vec<String>,
    #[serde(default)]
    pub special_requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub provider: String,
    pub url: String,
    pub topics: Vec<String>,
    pub level: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub est_hours: Option<u32>,
}

impl Course {
    pub fn level_rank(&self) -> u8 {
        Level::rank_of(&self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPlanStep {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub est_time_hours: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub goal: String,
    pub steps: Vec<LearningPlanStep>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// One step per scheduled week, titles prefixed with the week number.
pub type WeeklyPlan = Vec<LearningPlanStep>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Assistant => "assistant",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeQuestion {
    pub key: &'static str,
    pub prompt: &'static str,
    pub guidance: &'static str,
}

/// 外部課程搜尋服務的請求內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keywords: String,
    pub level: String,
    pub providers: String,
}

impl ToRecord for UserProfile {
    fn to_record(&self) -> Record {
        Record::new()
            .with("name", self.name.clone())
            .with("learning_goal", self.learning_goal.clone())
            .with("interested_topics", self.interested_topics.clone())
            .with("current_level", self.current_level.as_str())
            .with("provider_requirements", self.provider_requirements.clone())
            .with("weekly_time_hours", self.weekly_time_hours)
            .with("timeframe_weeks", self.timeframe_weeks)
            .with("phased_focus", self.phased_focus.clone())
            .with("special_requirements", self.special_requirements.clone())
    }
}

impl ToRecord for Course {
    fn to_record(&self) -> Record {
        Record::new()
            .with("title", self.title.clone())
            .with("provider", self.provider.clone())
            .with("url", self.url.clone())
            .with("topics", self.topics.clone())
            .with("level", self.level.clone())
            .with("summary", self.summary.clone())
            .with("est_hours", self.est_hours)
    }
}

impl ToRecord for LearningPlanStep {
    fn to_record(&self) -> Record {
        Record::new()
            .with("title", self.title.clone())
            .with("description", self.description.clone())
            .with("resources", self.resources.clone())
            .with("est_time_hours", self.est_time_hours)
    }
}

impl ToRecord for LearningPlan {
    fn to_record(&self) -> Record {
        let steps: Vec<serde_json::Value> = self
            .steps
            .iter()
            .map(|step| step.to_record().into_value())
            .collect();

        Record::new()
            .with("goal", self.goal.clone())
            .with("steps", steps)
            .with("notes", self.notes.clone())
    }
}

impl ToRecord for ConversationMessage {
    fn to_record(&self) -> Record {
        Record::new()
            .with("role", self.role.as_str())
            .with("content", self.content.clone())
            .with("timestamp", self.timestamp.to_rfc3339())
    }
}

impl ToRecord for SearchQuery {
    fn to_record(&self) -> Record {
        Record::new()
            .with("keywords", self.keywords.clone())
            .with("level", self.level.clone())
            .with("providers", self.providers.clone())
    }
}
