use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use giftery_core::config::{LoadOptions, LogFormat};
use serde::Serialize;
use toml::Value;

use crate::commands::{load_config, CommandResult};

#[derive(Debug, Serialize)]
struct ConfigField {
    key: &'static str,
    value: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct ConfigReport {
    command: &'static str,
    status: &'static str,
    precedence: &'static str,
    fields: Vec<ConfigField>,
}

pub fn run(options: LoadOptions, json_output: bool) -> CommandResult {
    let explicit_path = options.config_path.clone();
    let config = match load_config("config", options) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let config_file_path = detect_config_path(explicit_path.as_deref());
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let context = SourceContext { doc: config_file_doc, path: config_file_path };

    let api_key = if config.advisor.api_key.is_some() { "<redacted>" } else { "<unset>" };
    let seed = config
        .catalog
        .seed
        .map(|seed| seed.to_string())
        .unwrap_or_else(|| "<unset>".to_string());

    let fields = vec![
        ConfigField {
            key: "advisor.api_key",
            value: api_key.to_string(),
            source: context.source("advisor.api_key", &["GIFTERY_ADVISOR_API_KEY"]),
        },
        ConfigField {
            key: "advisor.base_url",
            value: config.advisor.base_url.clone(),
            source: context.source("advisor.base_url", &["GIFTERY_ADVISOR_BASE_URL"]),
        },
        ConfigField {
            key: "advisor.model",
            value: config.advisor.model.clone(),
            source: context.source("advisor.model", &["GIFTERY_ADVISOR_MODEL"]),
        },
        ConfigField {
            key: "advisor.timeout_secs",
            value: config.advisor.timeout_secs.to_string(),
            source: context.source("advisor.timeout_secs", &["GIFTERY_ADVISOR_TIMEOUT_SECS"]),
        },
        ConfigField {
            key: "advisor.max_retries",
            value: config.advisor.max_retries.to_string(),
            source: context.source("advisor.max_retries", &["GIFTERY_ADVISOR_MAX_RETRIES"]),
        },
        ConfigField {
            key: "store.url",
            value: config.store.url.clone(),
            source: context.source("store.url", &["GIFTERY_STORE_URL", "GIFTERY_DATABASE_URL"]),
        },
        ConfigField {
            key: "store.max_connections",
            value: config.store.max_connections.to_string(),
            source: context.source("store.max_connections", &["GIFTERY_STORE_MAX_CONNECTIONS"]),
        },
        ConfigField {
            key: "store.busy_timeout_ms",
            value: config.store.busy_timeout_ms.to_string(),
            source: context.source("store.busy_timeout_ms", &["GIFTERY_STORE_BUSY_TIMEOUT_MS"]),
        },
        ConfigField {
            key: "catalog.max_results",
            value: config.catalog.max_results.to_string(),
            source: context.source("catalog.max_results", &["GIFTERY_CATALOG_MAX_RESULTS"]),
        },
        ConfigField {
            key: "catalog.seed",
            value: seed,
            source: context.source("catalog.seed", &["GIFTERY_CATALOG_SEED"]),
        },
        ConfigField {
            key: "logging.level",
            value: config.logging.level.clone(),
            source: context
                .source("logging.level", &["GIFTERY_LOGGING_LEVEL", "GIFTERY_LOG_LEVEL"]),
        },
        ConfigField {
            key: "logging.format",
            value: log_format_label(config.logging.format).to_string(),
            source: context
                .source("logging.format", &["GIFTERY_LOGGING_FORMAT", "GIFTERY_LOG_FORMAT"]),
        },
    ];

    let report = ConfigReport {
        command: "config",
        status: "ok",
        precedence: "env > file > default",
        fields,
    };

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"command\":\"config\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
                error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code: 0, output }
}

struct SourceContext {
    doc: Option<Value>,
    path: Option<PathBuf>,
}

impl SourceContext {
    fn source(&self, key_path: &str, env_keys: &[&str]) -> String {
        for env_key in env_keys {
            if env::var_os(env_key).is_some() {
                return format!("env ({env_key})");
            }
        }

        if let Some(doc) = &self.doc {
            if contains_path(doc, key_path) {
                let file_path = self
                    .path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "config file".to_string());
                return format!("file ({file_path})");
            }
        }

        "default".to_string()
    }
}

fn detect_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.exists().then(|| path.to_path_buf());
    }

    [PathBuf::from("giftery.toml"), PathBuf::from("config/giftery.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn log_format_label(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    }
}

fn render_human(report: &ConfigReport) -> String {
    let mut lines = vec![format!("effective config (source precedence: {}):", report.precedence)];
    for field in &report.fields {
        lines.push(format!("- {} = {} (source: {})", field.key, field.value, field.source));
    }
    lines.join("\n")
}
