use crate::core::{
    ConfigProvider, ConversationLog, CourseSource, Pipeline, Record, Storage, ToRecord,
};
use crate::domain::model::{
    ConversationMessage, Course, LearningPlan, Role, SearchQuery, UserProfile, WeeklyPlan,
};
use crate::domain::services::{
    build_learning_plan, build_motivation_message, build_search_query, build_weekly_plan,
    recommend_courses, LearningProfilePayload, MatchOptions, ProfileBuilder,
};
use crate::utils::error::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::HashMap;

pub const JSON_OUTPUT: &str = "learning_plan.json";
pub const CSV_OUTPUT: &str = "weekly_plan.csv";
pub const TSV_OUTPUT: &str = "weekly_plan.tsv";

/// Where the learner profile comes from.
#[derive(Debug, Clone)]
pub enum ProfileInput {
    Answers {
        name: String,
        answers: HashMap<String, String>,
    },
    Payload(LearningProfilePayload),
}

#[derive(Debug, Clone)]
pub struct PlanningInput {
    pub profile: UserProfile,
    pub catalog: Option<Vec<Course>>,
}

#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub profile: UserProfile,
    pub search_query: SearchQuery,
    pub courses: Vec<Course>,
    pub plan: LearningPlan,
    pub weekly_plan: WeeklyPlan,
    pub motivation: String,
}

impl PlanOutcome {
    /// Empty-state messages for the presentation layer.
    pub fn notices(&self) -> Vec<String> {
        let mut notices = Vec::new();
        if self.courses.is_empty() {
            notices.push(
                "No courses returned. Supply a catalog or enable the builtin fallback."
                    .to_string(),
            );
        }
        if self.weekly_plan.is_empty() {
            notices.push("The weekly plan has no steps.".to_string());
        }
        notices
    }

    pub fn to_json(&self) -> serde_json::Value {
        let records = |items: Vec<Record>| -> Vec<serde_json::Value> {
            items.into_iter().map(|r| r.into_value()).collect()
        };

        serde_json::json!({
            "generated_at": Utc::now().to_rfc3339(),
            "profile": self.profile.to_record().into_value(),
            "search_query": self.search_query.to_record().into_value(),
            "courses": records(self.courses.iter().map(ToRecord::to_record).collect()),
            "plan": self.plan.to_record().into_value(),
            "weekly_plan": records(self.weekly_plan.iter().map(ToRecord::to_record).collect()),
            "motivation": self.motivation,
        })
    }
}

#[derive(Serialize)]
struct WeekRow<'a> {
    week: usize,
    title: &'a str,
    description: &'a str,
    resources: String,
    est_time_hours: Option<u32>,
}

fn weekly_table(weekly_plan: &WeeklyPlan, delimiter: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(&mut buffer);

        for (index, step) in weekly_plan.iter().enumerate() {
            writer.serialize(WeekRow {
                week: index + 1,
                title: &step.title,
                description: &step.description,
                resources: step.resources.join(" "),
                est_time_hours: step.est_time_hours,
            })?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

pub struct PlanningPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    input: ProfileInput,
    catalog: Option<Box<dyn CourseSource>>,
    conversation_log: Option<Box<dyn ConversationLog>>,
    transcript: Vec<ConversationMessage>,
}

impl<S: Storage, C: ConfigProvider> PlanningPipeline<S, C> {
    pub fn new(storage: S, config: C, input: ProfileInput) -> Self {
        Self {
            storage,
            config,
            input,
            catalog: None,
            conversation_log: None,
            transcript: Vec::new(),
        }
    }

    pub fn with_catalog(mut self, catalog: Box<dyn CourseSource>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_conversation_log(mut self, log: Box<dyn ConversationLog>) -> Self {
        self.conversation_log = Some(log);
        self
    }

    /// Intake exchange to record alongside the generated motivation message.
    pub fn with_transcript(mut self, transcript: Vec<ConversationMessage>) -> Self {
        self.transcript = transcript;
        self
    }

    fn motivation_for(&self, profile: &UserProfile) -> String {
        let progress = self.config.progress_percent();
        let last_action = self.config.last_action();
        match self.config.seed() {
            Some(seed) => build_motivation_message(
                profile,
                progress,
                last_action,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => build_motivation_message(profile, progress, last_action, &mut rand::rng()),
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for PlanningPipeline<S, C> {
    type Input = PlanningInput;
    type Output = PlanOutcome;

    fn extract(&self) -> Result<PlanningInput> {
        let builder = ProfileBuilder::new(self.config.profile_defaults());
        let profile = match &self.input {
            ProfileInput::Answers { name, answers } => builder.from_answers(name, answers),
            ProfileInput::Payload(payload) => builder.from_payload(payload),
        };
        tracing::debug!("Profile: {:?}", profile);

        let catalog = match &self.catalog {
            Some(source) => Some(source.courses()?),
            None => None,
        };

        Ok(PlanningInput { profile, catalog })
    }

    fn transform(&self, input: PlanningInput) -> Result<PlanOutcome> {
        let PlanningInput { profile, catalog } = input;

        let options = MatchOptions {
            limit: self.config.course_limit(),
            use_builtin_fallback: self.config.use_builtin_fallback(),
        };
        let courses = recommend_courses(&profile, catalog.as_deref(), options);
        if courses.is_empty() {
            tracing::warn!("No courses matched the profile");
        }

        let plan = build_learning_plan(&profile, &courses);
        let weekly_plan = build_weekly_plan(
            &plan,
            self.config.weekly_time_hours().or(profile.weekly_time_hours),
            self.config.timeframe_weeks().or(profile.timeframe_weeks),
        );
        let motivation = self.motivation_for(&profile);

        Ok(PlanOutcome {
            search_query: build_search_query(&profile),
            profile,
            courses,
            plan,
            weekly_plan,
            motivation,
        })
    }

    fn load(&self, outcome: PlanOutcome) -> Result<String> {
        for format in self.config.output_formats() {
            match format.as_str() {
                "json" => {
                    let json = serde_json::to_string_pretty(&outcome.to_json())?;
                    self.storage.write_file(JSON_OUTPUT, json.as_bytes())?;
                }
                "csv" => {
                    let table = weekly_table(&outcome.weekly_plan, b',')?;
                    self.storage.write_file(CSV_OUTPUT, &table)?;
                }
                "tsv" => {
                    let table = weekly_table(&outcome.weekly_plan, b'\t')?;
                    self.storage.write_file(TSV_OUTPUT, &table)?;
                }
                other => tracing::warn!("Skipping unsupported output format '{}'", other),
            }
        }

        if let Some(log) = &self.conversation_log {
            log.extend(&self.transcript)?;
            log.append(&ConversationMessage::new(
                Role::Assistant,
                outcome.motivation.clone(),
            ))?;
        }

        tracing::debug!(
            "Wrote {} output file(s) to {}",
            self.config.output_formats().len(),
            self.config.output_path()
        );
        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::{builtin_catalog, ProfileDefaults};
    use crate::utils::error::PlannerError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                PlannerError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MockLog {
        messages: Rc<RefCell<Vec<ConversationMessage>>>,
    }

    impl ConversationLog for MockLog {
        fn append(&self, message: &ConversationMessage) -> Result<()> {
            self.messages.borrow_mut().push(message.clone());
            Ok(())
        }

        fn load(&self) -> Result<Vec<ConversationMessage>> {
            Ok(self.messages.borrow().clone())
        }
    }

    struct StaticCatalog(Vec<Course>);

    impl CourseSource for StaticCatalog {
        fn courses(&self) -> Result<Vec<Course>> {
            Ok(self.0.clone())
        }
    }

    struct MockConfig {
        output_formats: Vec<String>,
        use_builtin_fallback: bool,
        timeframe_weeks: Option<u32>,
        default_providers: Vec<String>,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                output_formats: vec!["json".to_string(), "csv".to_string(), "tsv".to_string()],
                use_builtin_fallback: true,
                timeframe_weeks: None,
                default_providers: vec![],
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn output_path(&self) -> &str {
            "test_output"
        }

        fn output_formats(&self) -> &[String] {
            &self.output_formats
        }

        fn catalog_path(&self) -> Option<&str> {
            None
        }

        fn course_limit(&self) -> usize {
            3
        }

        fn use_builtin_fallback(&self) -> bool {
            self.use_builtin_fallback
        }

        fn profile_defaults(&self) -> ProfileDefaults {
            ProfileDefaults {
                providers: self.default_providers.clone(),
            }
        }

        fn timeframe_weeks(&self) -> Option<u32> {
            self.timeframe_weeks
        }

        fn progress_percent(&self) -> Option<u8> {
            Some(10)
        }

        fn last_action(&self) -> Option<&str> {
            Some("finished pandas basics")
        }

        fn seed(&self) -> Option<u64> {
            Some(3)
        }

        fn conversation_log_path(&self) -> Option<&str> {
            None
        }
    }

    fn answers(pairs: &[(&str, &str)]) -> ProfileInput {
        ProfileInput::Answers {
            name: "Learner".to_string(),
            answers: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_transform_uses_builtin_fallback() {
        let pipeline = PlanningPipeline::new(
            MockStorage::default(),
            MockConfig::new(),
            answers(&[("interested_topics", "python"), ("timeframe_weeks", "6")]),
        );

        let input = pipeline.extract().unwrap();
        assert!(input.catalog.is_none());

        let outcome = pipeline.transform(input).unwrap();
        assert_eq!(outcome.courses.len(), 3);
        assert_eq!(outcome.plan.steps.len(), 5);
        assert_eq!(outcome.weekly_plan.len(), 6);
        assert_eq!(
            outcome.weekly_plan[5].title,
            "Week 6: Step 0: Clarify success"
        );
        assert!(outcome.notices().is_empty());
    }

    #[test]
    fn test_config_schedule_override_wins_over_profile() {
        let mut config = MockConfig::new();
        config.timeframe_weeks = Some(2);
        let pipeline = PlanningPipeline::new(
            MockStorage::default(),
            config,
            answers(&[("timeframe_weeks", "9")]),
        );

        let outcome = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        assert_eq!(outcome.weekly_plan.len(), 2);
    }

    #[test]
    fn test_supplied_catalog_without_match_reports_empty_state() {
        let mut config = MockConfig::new();
        config.use_builtin_fallback = false;
        let pipeline = PlanningPipeline::new(
            MockStorage::default(),
            config,
            answers(&[("interested_topics", "rust")]),
        )
        .with_catalog(Box::new(StaticCatalog(builtin_catalog())));

        let outcome = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        assert!(outcome.courses.is_empty());
        assert_eq!(outcome.plan.steps.len(), 2);
        assert_eq!(outcome.weekly_plan.len(), 4);
        assert_eq!(outcome.notices().len(), 1);
    }

    #[test]
    fn test_payload_input_uses_configured_default_providers() {
        let mut config = MockConfig::new();
        config.default_providers = vec!["Coursera".to_string()];
        let pipeline = PlanningPipeline::new(
            MockStorage::default(),
            config,
            ProfileInput::Payload(LearningProfilePayload::default()),
        );

        let input = pipeline.extract().unwrap();
        assert_eq!(input.profile.provider_requirements, vec!["Coursera"]);

        // 沒有 Coursera 課程，fallback 也只能取允許的供應商
        let outcome = pipeline.transform(input).unwrap();
        assert!(outcome.courses.is_empty());
    }

    #[test]
    fn test_seeded_motivation_is_stable() {
        let make = || {
            PlanningPipeline::new(MockStorage::default(), MockConfig::new(), answers(&[]))
        };
        let first = make().transform(make().extract().unwrap()).unwrap();
        let second = make().transform(make().extract().unwrap()).unwrap();
        assert_eq!(first.motivation, second.motivation);
        assert!(first.motivation.contains("Learner"));
    }

    #[test]
    fn test_load_writes_all_formats_and_logs() {
        let storage = MockStorage::default();
        let log = MockLog::default();
        let pipeline = PlanningPipeline::new(
            storage.clone(),
            MockConfig::new(),
            answers(&[("interested_topics", "sql"), ("weekly_time_hours", "5")]),
        )
        .with_conversation_log(Box::new(log.clone()))
        .with_transcript(vec![ConversationMessage::new(Role::User, "sql")]);

        let outcome = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let motivation = outcome.motivation.clone();
        let output_path = pipeline.load(outcome).unwrap();
        assert_eq!(output_path, "test_output");

        let json: serde_json::Value =
            serde_json::from_str(&storage.get_file(JSON_OUTPUT).unwrap()).unwrap();
        assert_eq!(json["courses"][0]["title"], "SQL Fundamentals");
        assert_eq!(json["plan"]["steps"].as_array().unwrap().len(), 3);
        assert_eq!(json["weekly_plan"].as_array().unwrap().len(), 4);
        assert_eq!(json["search_query"]["keywords"], "sql, Grow data skills");

        let csv = storage.get_file(CSV_OUTPUT).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "week,title,description,resources,est_time_hours");
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("2,Week 2: Step 1: SQL Fundamentals,"));
        assert!(lines[2].ends_with(",4"));

        let tsv = storage.get_file(TSV_OUTPUT).unwrap();
        assert!(tsv.starts_with("week\ttitle\tdescription\tresources\test_time_hours"));

        let messages = log.load().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].content, motivation);
    }
}
