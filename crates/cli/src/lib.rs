pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use giftery_core::config::{AppConfig, LoadOptions, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use commands::message::MessageArgs;
use commands::recommend::RecommendArgs;
use commands::synthesize::SynthesizeArgs;

#[derive(Debug, Parser)]
#[command(
    name = "giftery",
    about = "Giftery gift recommendation CLI",
    long_about = "Run the gift recommendation pipeline, compose occasion messages, inspect effective configuration, and manage the local store.",
    after_help = "Examples:\n  giftery recommend --prompt \"birthday gift for my dad who loves grilling\"\n  giftery synthesize --seed 7 --limit 10\n  giftery message --occasion birthday --style funny --recipient Maya\n  giftery doctor --json"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Path to a giftery.toml configuration file"
    )]
    config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_name = "FORMAT",
        value_parser = parse_log_format,
        help = "Log output format (compact|pretty|json)"
    )]
    format: Option<LogFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Run the recommendation pipeline and print a JSON product summary")]
    Recommend(RecommendArgs),
    #[command(about = "Dump the synthesized demo catalog as JSON")]
    Synthesize(SynthesizeArgs),
    #[command(about = "Compose a greeting card or thank-you note through the AI advisor")]
    Message(MessageArgs),
    #[command(about = "Show the effective configuration and where each value came from")]
    Config {
        #[arg(long, help = "Print machine-readable JSON instead of the human summary")]
        json: bool,
    },
    #[command(about = "Apply pending store migrations and return structured status output")]
    Migrate,
    #[command(about = "Validate config, advisor key readiness, and store connectivity")]
    Doctor {
        #[arg(long, help = "Print machine-readable JSON instead of the human summary")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        ..LoadOptions::default()
    };
    init_logging(&options, cli.format);

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(options, args),
        Command::Synthesize(args) => commands::synthesize::run(options, args),
        Command::Message(args) => commands::message::run(options, args),
        Command::Config { json } => commands::config::run(options, json),
        Command::Migrate => commands::migrate::run(options),
        Command::Doctor { json } => commands::doctor::run(options, json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Best-effort subscriber setup; a config that fails to load still gets
/// default logging so the command can report the failure itself.
fn init_logging(options: &LoadOptions, format_override: Option<LogFormat>) {
    let logging = AppConfig::load(options.clone()).map(|config| config.logging).unwrap_or_else(
        |_| LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
    );
    let format = format_override.unwrap_or(logging.format);
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .ok();
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse::<LogFormat>().map_err(|error| error.to_string())
}
