use crate::core::pipeline::ProfileInput;
use crate::core::ConfigProvider;
use crate::domain::services::matcher::DEFAULT_LIMIT;
use crate::domain::services::profile::DEFAULT_NAME;
use crate::domain::services::{LearningProfilePayload, ProfileDefaults};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub motivation: MotivationConfig,
    pub load: LoadConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub answers: Option<HashMap<String, String>>,
    pub payload_path: Option<String>,
    pub defaults: Option<ProfileDefaults>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendConfig {
    pub limit: Option<usize>,
    pub use_builtin_fallback: Option<bool>,
    pub catalog_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub weekly_time_hours: Option<u32>,
    pub timeframe_weeks: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotivationConfig {
    pub progress_percent: Option<u8>,
    pub last_action: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub conversation_log: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得學習者資料來源：payload 檔案優先，否則使用 answers 表
    pub fn profile_input(&self) -> Result<ProfileInput> {
        if let Some(path) = &self.profile.payload_path {
            let content = std::fs::read_to_string(path)?;
            let payload: LearningProfilePayload = serde_json::from_str(&content)?;
            return Ok(ProfileInput::Payload(payload));
        }

        Ok(ProfileInput::Answers {
            name: self
                .profile
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            answers: self.profile.answers.clone().unwrap_or_default(),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;

        if let Some(limit) = self.recommend.limit {
            validation::validate_positive_number("recommend.limit", limit, 1)?;
        }

        if let Some(catalog) = &self.recommend.catalog_path {
            validation::validate_file_extensions(
                "recommend.catalog_path",
                std::slice::from_ref(catalog),
                &["json"],
            )?;
        }

        if let Some(percent) = self.motivation.progress_percent {
            validation::validate_range("motivation.progress_percent", percent, 0, 100)?;
        }

        if self.profile.payload_path.is_some() && self.profile.answers.is_some() {
            return Err(PlannerError::ConfigValidationError {
                field: "profile".to_string(),
                message: "set either profile.answers or profile.payload_path, not both"
                    .to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn catalog_path(&self) -> Option<&str> {
        self.recommend.catalog_path.as_deref()
    }

    fn course_limit(&self) -> usize {
        self.recommend.limit.unwrap_or(DEFAULT_LIMIT)
    }

    fn use_builtin_fallback(&self) -> bool {
        self.recommend.use_builtin_fallback.unwrap_or(false)
    }

    fn profile_defaults(&self) -> ProfileDefaults {
        self.profile.defaults.clone().unwrap_or_default()
    }

    fn weekly_time_hours(&self) -> Option<u32> {
        self.schedule.weekly_time_hours
    }

    fn timeframe_weeks(&self) -> Option<u32> {
        self.schedule.timeframe_weeks
    }

    fn progress_percent(&self) -> Option<u8> {
        self.motivation.progress_percent
    }

    fn last_action(&self) -> Option<&str> {
        self.motivation.last_action.as_deref()
    }

    fn seed(&self) -> Option<u64> {
        self.motivation.seed
    }

    fn conversation_log_path(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.conversation_log.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
