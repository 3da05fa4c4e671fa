use autoshop_records::core::ConfigProvider;
use autoshop_records::utils::{logger, validation::Validate};
use autoshop_records::{
    demo, AppointmentValidator, BatchArgs, BatchEngine, CliConfig, Command, LocalStorage,
    RecordError, SystemClock, TomlConfig, VehicleEnricher,
};
use clap::Parser;

fn load_settings(config: &CliConfig) -> Result<TomlConfig, RecordError> {
    config.validate()?;
    match &config.config {
        Some(path) => TomlConfig::from_file(path),
        None => Ok(TomlConfig::default()),
    }
}

fn run(config: &CliConfig, settings: TomlConfig) -> Result<(), RecordError> {
    let engine = BatchEngine::new(LocalStorage::default(), settings);

    let (rendered, args): (String, &BatchArgs) = match &config.command {
        Command::Demo => {
            println!("{}", demo::report(SystemClock)?);
            return Ok(());
        }
        Command::Validate(args) => (
            engine.run(&AppointmentValidator::new(), &args.input, args.output.as_deref())?,
            args,
        ),
        Command::Enrich(args) => (
            engine.run(&VehicleEnricher::new(), &args.input, args.output.as_deref())?,
            args,
        ),
    };

    if args.output.is_none() {
        println!("{}", rendered);
    }
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // Settings are loaded before logging is up so the config file can pick the filter.
    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if settings.json_logs() {
        logger::init_json_logger(config.verbose, settings.log_filter());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_filter());
    }

    tracing::info!("Starting autoshop-records");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config, settings) {
        tracing::error!("❌ {} failed: {}", command_name(&config.command), e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Demo => "demo",
        Command::Validate(_) => "validate",
        Command::Enrich(_) => "enrich",
    }
}
