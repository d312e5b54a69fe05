use giftery_core::config::{LoadOptions, StoreConfig};
use giftery_store::{connect_with_settings, migrations};

use crate::commands::{build_runtime, load_config, CommandResult};

pub fn run(options: LoadOptions) -> CommandResult {
    match execute(options) {
        Ok(result) | Err(result) => result,
    }
}

fn execute(options: LoadOptions) -> Result<CommandResult, CommandResult> {
    let config = load_config("migrate", options)?;
    let runtime = build_runtime("migrate")?;
    runtime.block_on(apply_migrations(&config.store))?;

    Ok(CommandResult::success(
        "migrate",
        format!("applied pending migrations to `{}`", config.store.url),
    ))
}

async fn apply_migrations(store: &StoreConfig) -> Result<(), CommandResult> {
    let pool = connect_with_settings(&store.url, store.max_connections, store.busy_timeout_ms)
        .await
        .map_err(|error| {
            CommandResult::failure("migrate", "db_connectivity", error.to_string(), 4)
        })?;

    let applied = migrations::run_pending(&pool).await;
    pool.close().await;
    applied.map_err(|error| CommandResult::failure("migrate", "migration", error.to_string(), 5))
}
