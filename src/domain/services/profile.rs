use crate::domain::model::{Level, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_NAME: &str = "Learner";
pub const DEFAULT_GOAL: &str = "Grow data skills";
pub const DEFAULT_TOPIC: &str = "python";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentLevel {
    pub overall: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Default for CurrentLevel {
    fn default() -> Self {
        Self {
            overall: "Beginner".to_string(),
            notes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCommitment {
    pub hours_per_week: Option<u32>,
    #[serde(default)]
    pub timeframe_weeks: Option<u32>,
}

impl Default for TimeCommitment {
    fn default() -> Self {
        Self {
            hours_per_week: Some(6),
            timeframe_weeks: None,
        }
    }
}

/// 前端 intake 流程送出的結構化資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningProfilePayload {
    pub name: String,
    pub learning_goals: Vec<String>,
    pub learning_topics: Vec<String>,
    pub current_level: CurrentLevel,
    pub preferred_providers: Vec<String>,
    pub special_requirements: Vec<String>,
    pub time_commitment: TimeCommitment,
}

impl Default for LearningProfilePayload {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            learning_goals: Vec::new(),
            learning_topics: Vec::new(),
            current_level: CurrentLevel::default(),
            preferred_providers: Vec::new(),
            special_requirements: Vec::new(),
            time_commitment: TimeCommitment::default(),
        }
    }
}

/// Defaults substituted when an intake source leaves a field blank.
/// Both intake paths share the same provider default; empty means unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    #[serde(default)]
    pub providers: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    defaults: ProfileDefaults,
}

impl ProfileBuilder {
    pub fn new(defaults: ProfileDefaults) -> Self {
        Self { defaults }
    }

    pub fn from_answers(&self, name: &str, answers: &HashMap<String, String>) -> UserProfile {
        let answer = |key: &str| answers.get(key).map(String::as_str).unwrap_or("");

        let name = Some(answer("name").trim())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| name.trim());

        let learning_goal = answer("learning_goal").trim();

        UserProfile {
            name: non_blank_or(name, DEFAULT_NAME),
            learning_goal: non_blank_or(learning_goal, DEFAULT_GOAL),
            interested_topics: with_default_topic(split_list(answer("interested_topics"), ',')),
            current_level: parse_level(answer("current_level")),
            provider_requirements: self.providers_or_default(split_list(
                answer("provider_requirements"),
                ',',
            )),
            weekly_time_hours: parse_count(answer("weekly_time_hours")),
            timeframe_weeks: parse_count(answer("timeframe_weeks")),
            phased_focus: split_list(answer("phased_focus"), ';'),
            special_requirements: split_list(answer("special_requirements"), ','),
        }
    }

    pub fn from_payload(&self, payload: &LearningProfilePayload) -> UserProfile {
        let goals: Vec<&str> = payload
            .learning_goals
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .collect();

        UserProfile {
            name: non_blank_or(payload.name.trim(), DEFAULT_NAME),
            learning_goal: non_blank_or(&goals.join(", "), DEFAULT_GOAL),
            interested_topics: with_default_topic(trim_all(&payload.learning_topics)),
            current_level: parse_level(&payload.current_level.overall),
            provider_requirements: self
                .providers_or_default(trim_all(&payload.preferred_providers)),
            weekly_time_hours: payload.time_commitment.hours_per_week,
            timeframe_weeks: payload.time_commitment.timeframe_weeks,
            phased_focus: Vec::new(),
            special_requirements: trim_all(&payload.special_requirements),
        }
    }

    fn providers_or_default(&self, providers: Vec<String>) -> Vec<String> {
        if providers.is_empty() {
            self.defaults.providers.clone()
        } else {
            providers
        }
    }
}

/// Create a profile from free-text intake answers.
pub fn build_profile(name: &str, answers: &HashMap<String, String>) -> UserProfile {
    ProfileBuilder::default().from_answers(name, answers)
}

/// Convert a structured intake payload into a profile.
pub fn build_profile_from_payload(payload: &LearningProfilePayload) -> UserProfile {
    ProfileBuilder::default().from_payload(payload)
}

fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn trim_all(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn with_default_topic(topics: Vec<String>) -> Vec<String> {
    if topics.is_empty() {
        vec![DEFAULT_TOPIC.to_string()]
    } else {
        topics
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn parse_level(raw: &str) -> Level {
    let raw = raw.trim();
    if raw.is_empty() {
        return Level::Beginner;
    }
    Level::from_token(raw).unwrap_or_else(|| {
        tracing::warn!("Unknown level '{}', treating as beginner", raw);
        Level::Beginner
    })
}

// 只接受純數字字串，其餘一律視為未設定
fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
