use clap::Parser;
use learning_assistant::adapters::intake::run_intake;
use learning_assistant::config::LogFormat;
use learning_assistant::core::ConfigProvider;
use learning_assistant::utils::error::ErrorSeverity;
use learning_assistant::utils::{logger, validation::Validate};
use learning_assistant::{
    intake_questions, CliConfig, ConversationMessage, JsonCatalog, JsonlConversationLog,
    LocalStorage, PlanOutcome, PlannerEngine, PlanningPipeline, ProfileInput, Result,
    TomlConfig,
};

fn print_outcome(outcome: &PlanOutcome) {
    println!("=== COURSES ({}) ===", outcome.courses.len());
    for course in &outcome.courses {
        println!("- {} [{}, {}] {}", course.title, course.provider, course.level, course.url);
    }

    println!("\n=== WEEKLY PLAN ===");
    for step in &outcome.weekly_plan {
        match step.est_time_hours {
            Some(hours) => println!("{} ({}h)", step.title, hours),
            None => println!("{}", step.title),
        }
    }

    println!("\n=== NOTES ===");
    for note in &outcome.plan.notes {
        println!("- {}", note);
    }

    println!("\n=== MOTIVATION ===");
    println!("{}", outcome.motivation);

    for notice in outcome.notices() {
        println!("\n⚠️  {}", notice);
    }
}

fn execute<C: ConfigProvider + Validate>(
    config: C,
    input: ProfileInput,
    transcript: Vec<ConversationMessage>,
    dry_run: bool,
) -> Result<()> {
    // 驗證配置
    config.validate()?;

    let catalog = config.catalog_path().map(JsonCatalog::new);
    let log_path = config.conversation_log_path().map(str::to_string);
    let storage = LocalStorage::new(config.output_path().to_string());

    let mut pipeline = PlanningPipeline::new(storage, config, input).with_transcript(transcript);
    if let Some(catalog) = catalog {
        pipeline = pipeline.with_catalog(Box::new(catalog));
    }
    if let Some(path) = log_path {
        pipeline = pipeline.with_conversation_log(Box::new(JsonlConversationLog::open(path)?));
    }

    let engine = PlannerEngine::new(pipeline);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        let outcome = engine.preview()?;
        print_outcome(&outcome);
        return Ok(());
    }

    let output_path = engine.run_with_report(print_outcome)?;
    println!("\n📁 Output saved to: {}", output_path);
    Ok(())
}

fn run(cli: CliConfig) -> Result<()> {
    let session = if cli.interactive {
        let stdin = std::io::stdin();
        Some(run_intake(intake_questions(), stdin.lock(), std::io::stdout())?)
    } else {
        None
    };

    // 互動模式的答案優先於檔案提供的答案
    let (interactive_input, transcript) = match session {
        Some(session) => (
            Some(ProfileInput::Answers {
                name: cli.name.clone(),
                answers: session.answers,
            }),
            session.transcript,
        ),
        None => (None, Vec::new()),
    };

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = TomlConfig::from_file(&path)?;
            if let Some(seed) = cli.seed {
                config.motivation.seed = Some(seed);
            }
            let input = match interactive_input {
                Some(input) => input,
                None => config.profile_input()?,
            };
            execute(config, input, transcript, cli.dry_run)
        }
        None => {
            let input = match interactive_input {
                Some(input) => input,
                None => cli.profile_input()?,
            };
            let dry_run = cli.dry_run;
            execute(cli, input, transcript, dry_run)
        }
    }
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Text => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("🚀 Starting learning-assistant");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli) {
        tracing::error!(
            "❌ Planning failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}
