use crate::core::pipeline::ProfileInput;
use crate::core::ConfigProvider;
use crate::domain::services::matcher::DEFAULT_LIMIT;
use crate::domain::services::{LearningProfilePayload, ProfileDefaults};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "learning-assistant")]
#[command(about = "Build a personal learning plan and weekly schedule")]
pub struct CliConfig {
    /// TOML configuration file; replaces the planning flags below
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "Learner")]
    pub name: String,

    /// JSON object mapping intake question keys to free-text answers
    #[arg(long, conflicts_with_all = ["payload", "interactive"])]
    pub answers: Option<String>,

    /// JSON structured intake payload
    #[arg(long, conflicts_with = "interactive")]
    pub payload: Option<String>,

    /// Ask the intake questions on the terminal
    #[arg(short, long)]
    pub interactive: bool,

    /// JSON array of courses to filter instead of the builtin catalog
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    #[arg(long, help = "Use the builtin catalog and starter-set fallback")]
    pub builtin_fallback: bool,

    /// Providers assumed when the learner names none (empty = any provider)
    #[arg(long, value_delimiter = ',')]
    pub default_providers: Vec<String>,

    #[arg(long)]
    pub weekly_hours: Option<u32>,

    #[arg(long)]
    pub weeks: Option<u32>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub progress: Option<u8>,

    #[arg(long)]
    pub last_action: Option<String>,

    /// Seed for reproducible motivation messages
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json,csv")]
    pub output_formats: Vec<String>,

    /// JSONL file that receives the intake transcript and motivation message
    #[arg(long)]
    pub conversation_log: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the plan without writing any files")]
    pub dry_run: bool,
}

impl CliConfig {
    /// Answers or payload read from the files named on the command line.
    /// Interactive intake is handled by the caller.
    pub fn profile_input(&self) -> Result<ProfileInput> {
        if let Some(path) = &self.payload {
            let payload: LearningProfilePayload =
                serde_json::from_str(&std::fs::read_to_string(path)?)?;
            return Ok(ProfileInput::Payload(payload));
        }

        let answers: HashMap<String, String> = match &self.answers {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => HashMap::new(),
        };

        Ok(ProfileInput::Answers {
            name: self.name.clone(),
            answers,
        })
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    fn course_limit(&self) -> usize {
        self.limit
    }

    fn use_builtin_fallback(&self) -> bool {
        self.builtin_fallback
    }

    fn profile_defaults(&self) -> ProfileDefaults {
        ProfileDefaults {
            providers: self
                .default_providers
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    fn weekly_time_hours(&self) -> Option<u32> {
        self.weekly_hours
    }

    fn timeframe_weeks(&self) -> Option<u32> {
        self.weeks
    }

    fn progress_percent(&self) -> Option<u8> {
        self.progress
    }

    fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn conversation_log_path(&self) -> Option<&str> {
        self.conversation_log.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("output_formats", &self.output_formats)?;
        validation::validate_positive_number("limit", self.limit, 1)?;
        if let Some(catalog) = &self.catalog {
            validation::validate_file_extensions(
                "catalog",
                std::slice::from_ref(catalog),
                &["json"],
            )?;
        }
        Ok(())
    }
}
