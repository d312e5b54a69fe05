use clap::Args;
use giftery_ai::{HttpGiftAdvisor, PipelineOutcome, RecommendationPipeline, RecommendationSource};
use giftery_core::config::{AppConfig, LoadOptions};
use giftery_core::{CatalogSynthesizer, FilterCriteria, PriceBracket, SortKey};
use giftery_store::{connect_with_settings, migrations, HistoryStore, PromptRecord, SqlHistoryStore};
use serde_json::Value;
use tracing::warn;

use crate::commands::{build_runtime, load_config, seeded_rng, CommandResult};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[arg(long, help = "Free-text description of the recipient and occasion")]
    pub prompt: String,
    #[arg(
        long,
        default_value = "",
        help = "Substring filter over product name, description, and brand"
    )]
    pub search: String,
    #[arg(long, help = "Category label filter (e.g. Electronics); omit for all categories")]
    pub category: Option<String>,
    #[arg(
        long,
        default_value = "all",
        value_name = "BRACKET",
        help = "Price bracket: all, min-max (e.g. 0-50), or a bare minimum like 500"
    )]
    pub price: String,
    #[arg(
        long,
        default_value = "relevance",
        value_name = "KEY",
        help = "Sort key (ai-score|occasion-match|price-low|price-high|rating|reviews|name|relevance)"
    )]
    pub sort: String,
    #[arg(long, help = "Fixed RNG seed for reproducible output")]
    pub seed: Option<u64>,
    #[arg(long, help = "Skip the advisor and synthesize the catalog locally")]
    pub offline: bool,
    #[arg(long, help = "Cap on the number of products returned")]
    pub limit: Option<usize>,
}

pub fn run(mut options: LoadOptions, args: RecommendArgs) -> CommandResult {
    if args.seed.is_some() {
        options.overrides.catalog_seed = args.seed;
    }

    let config = match load_config("recommend", options) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let criteria = match build_criteria(&args) {
        Ok(criteria) => criteria,
        Err(message) => {
            return CommandResult::failure("recommend", "invalid_argument", message, 2);
        }
    };

    let runtime = match build_runtime("recommend") {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    let mut rng = seeded_rng(config.catalog.seed);
    let cap = config.catalog.max_results.min(args.limit.unwrap_or(usize::MAX));
    let synthesizer = CatalogSynthesizer::new().with_max_results(cap);

    let mut outcome = if args.offline {
        let products = criteria.apply(&synthesizer.synthesize(&args.prompt, &mut rng));
        PipelineOutcome {
            products,
            analysis: None,
            source: RecommendationSource::Synthesized,
            fallback_code: None,
            rejected: 0,
        }
    } else {
        let advisor = match HttpGiftAdvisor::from_config(&config.advisor) {
            Ok(advisor) => advisor,
            Err(error) => {
                return CommandResult::failure("recommend", "advisor_init", error.to_string(), 3);
            }
        };
        let pipeline = RecommendationPipeline::new(advisor).with_synthesizer(synthesizer);
        runtime.block_on(pipeline.submit(&args.prompt, &criteria, &mut rng))
    };

    if let Some(limit) = args.limit {
        outcome.products.truncate(limit);
    }

    record_history(&runtime, &config, &args.prompt, &outcome);

    let message = match outcome.source {
        RecommendationSource::Advisor => {
            format!("{} products from the advisor", outcome.products.len())
        }
        RecommendationSource::Synthesized => {
            format!("{} products from the synthesized catalog", outcome.products.len())
        }
    };
    let data = serde_json::to_value(&outcome).unwrap_or(Value::Null);
    CommandResult::success_with_data("recommend", message, data)
}

fn build_criteria(args: &RecommendArgs) -> Result<FilterCriteria, String> {
    let bracket = args.price.parse::<PriceBracket>()?;
    let sort_key = args.sort.parse::<SortKey>()?;

    let mut criteria = FilterCriteria::new()
        .with_search_term(args.search.as_str())
        .with_price_bracket(bracket)
        .with_sort_key(sort_key);
    if let Some(category) = &args.category {
        criteria = criteria.with_category(category.as_str());
    }
    Ok(criteria)
}

/// The recommendation itself never fails on store trouble; a skipped
/// history write is only logged.
fn record_history(
    runtime: &tokio::runtime::Runtime,
    config: &AppConfig,
    prompt: &str,
    outcome: &PipelineOutcome,
) {
    let result = runtime.block_on(async {
        let pool = connect_with_settings(
            &config.store.url,
            config.store.max_connections,
            config.store.busy_timeout_ms,
        )
        .await
        .map_err(|error| error.to_string())?;
        migrations::run_pending(&pool).await.map_err(|error| error.to_string())?;

        let record = PromptRecord::new(prompt).with_product_ids(
            outcome.products.iter().map(|product| product.id.as_str().to_string()).collect(),
        );
        let record = match &outcome.analysis {
            Some(analysis) => record.with_analysis(analysis.clone()),
            None => record,
        };

        let store = SqlHistoryStore::new(pool.clone());
        store.record(record).await.map_err(|error| error.to_string())?;
        pool.close().await;
        Ok::<(), String>(())
    });

    if let Err(error) = result {
        warn!(
            event_name = "cli.history.skipped",
            error = %error,
            "prompt was not recorded to history"
        );
    }
}
