pub mod config;
pub mod doctor;
pub mod message;
pub mod migrate;
pub mod recommend;
pub mod synthesize;

use giftery_core::config::{AppConfig, LoadOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::Value;
use tokio::runtime::Runtime;

/// What a subcommand hands back to `main`: an exit code plus the rendered
/// stdout payload.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

/// Machine-readable envelope shared by every subcommand.
#[derive(Debug, Serialize)]
struct CommandOutcome<'a> {
    command: &'a str,
    status: &'a str,
    error_class: Option<&'a str>,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        Self::render(command, None, &message.into(), None, 0)
    }

    pub fn success_with_data(command: &str, message: impl Into<String>, data: Value) -> Self {
        Self::render(command, None, &message.into(), Some(&data), 0)
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        Self::render(command, Some(error_class), &message.into(), None, exit_code)
    }

    fn render(
        command: &str,
        error_class: Option<&str>,
        message: &str,
        data: Option<&Value>,
        exit_code: u8,
    ) -> Self {
        let envelope = CommandOutcome {
            command,
            status: if error_class.is_none() { "ok" } else { "error" },
            error_class,
            message,
            data,
        };
        let output = serde_json::to_string(&envelope).unwrap_or_else(|error| {
            let detail = error.to_string().replace('\\', "\\\\").replace('"', "\\\"");
            format!(
                r#"{{"command":"unknown","status":"error","error_class":"serialization","message":"{detail}"}}"#
            )
        });
        Self { exit_code, output }
    }
}

/// Loads and validates configuration the same way for every subcommand, so a
/// bad config always surfaces as `config_validation` with exit code 2.
pub(crate) fn load_config(
    command: &'static str,
    options: LoadOptions,
) -> Result<AppConfig, CommandResult> {
    AppConfig::load(options).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            2,
        )
    })
}

/// Subcommands drive async store and advisor IO from a blocking context; a
/// single-threaded runtime is enough for that.
pub(crate) fn build_runtime(command: &'static str) -> Result<Runtime, CommandResult> {
    tokio::runtime::Builder::new_current_thread().enable_all().build().map_err(|error| {
        CommandResult::failure(
            command,
            "runtime_init",
            format!("failed to initialize async runtime: {error}"),
            3,
        )
    })
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
