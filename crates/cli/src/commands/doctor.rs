use giftery_core::config::{AppConfig, LoadOptions};
use giftery_store::connect_with_settings;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::commands::CommandResult;

const SKIPPED_DETAILS: &str = "skipped because configuration did not load";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

impl CheckStatus {
    fn marker(self) -> &'static str {
        match self {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        }
    }
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

impl DoctorCheck {
    fn pass(name: &'static str, details: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Pass, details: details.into() }
    }

    fn fail(name: &'static str, details: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Fail, details: details.into() }
    }

    fn skipped(name: &'static str) -> Self {
        Self { name, status: CheckStatus::Skipped, details: SKIPPED_DETAILS.to_string() }
    }
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    command: &'static str,
    status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    fn from_checks(checks: Vec<DoctorCheck>) -> Self {
        let healthy = checks.iter().all(|check| check.status == CheckStatus::Pass);
        let summary = if healthy {
            "doctor: all readiness checks passed"
        } else {
            "doctor: one or more readiness checks failed"
        };
        Self {
            command: "doctor",
            status: if healthy { CheckStatus::Pass } else { CheckStatus::Fail },
            summary: summary.to_string(),
            checks,
        }
    }
}

pub fn run(options: LoadOptions, json_output: bool) -> CommandResult {
    let report = build_report(options);

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            let detail = error.to_string().replace('\\', "\\\\").replace('"', "\\\"");
            format!(
                r#"{{"command":"doctor","status":"fail","summary":"doctor serialization failed","error":"{detail}"}}"#
            )
        })
    } else {
        render_human(&report)
    };

    let exit_code = if report.status == CheckStatus::Pass { 0 } else { 6 };
    CommandResult { exit_code, output }
}

fn build_report(options: LoadOptions) -> DoctorReport {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return DoctorReport::from_checks(vec![
                DoctorCheck::fail("config_validation", error.to_string()),
                DoctorCheck::skipped("advisor_key_readiness"),
                DoctorCheck::skipped("store_connectivity"),
            ]);
        }
    };

    DoctorReport::from_checks(vec![
        DoctorCheck::pass("config_validation", "configuration loaded and validated"),
        check_advisor_key(&config),
        check_store_connectivity(&config),
    ])
}

fn check_advisor_key(config: &AppConfig) -> DoctorCheck {
    const NAME: &str = "advisor_key_readiness";

    let Some(key) = &config.advisor.api_key else {
        return DoctorCheck::fail(
            NAME,
            "no advisor api key configured (set GIFTERY_ADVISOR_API_KEY); \
             recommendations will fall back to the synthesized catalog",
        );
    };

    let exposed = key.expose_secret().trim();
    if exposed.is_empty() {
        DoctorCheck::fail(NAME, "configured advisor api key is blank")
    } else if !exposed.starts_with("sk-") {
        DoctorCheck::fail(
            NAME,
            "configured key does not look like a service key (expected `sk-` prefix)",
        )
    } else {
        DoctorCheck::pass(NAME, "advisor api key present and well-formed")
    }
}

fn check_store_connectivity(config: &AppConfig) -> DoctorCheck {
    const NAME: &str = "store_connectivity";

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return DoctorCheck::fail(NAME, format!("failed to initialize async runtime: {error}"));
        }
    };

    let store = &config.store;
    let probe = runtime.block_on(async {
        match connect_with_settings(&store.url, store.max_connections, store.busy_timeout_ms).await
        {
            Ok(pool) => {
                pool.close().await;
                Ok(())
            }
            Err(error) => Err(format!("failed to connect to store: {error}")),
        }
    });

    match probe {
        Ok(()) => DoctorCheck::pass(NAME, format!("connected using `{}`", store.url)),
        Err(details) => DoctorCheck::fail(NAME, details),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let checks = report
        .checks
        .iter()
        .map(|check| format!("- [{}] {}: {}", check.status.marker(), check.name, check.details));

    std::iter::once(report.summary.clone()).chain(checks).collect::<Vec<_>>().join("\n")
}
