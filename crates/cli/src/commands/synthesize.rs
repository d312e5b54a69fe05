use clap::Args;
use giftery_core::config::LoadOptions;
use giftery_core::CatalogSynthesizer;
use serde_json::Value;

use crate::commands::{load_config, seeded_rng, CommandResult};

#[derive(Args, Debug)]
pub struct SynthesizeArgs {
    #[arg(long, help = "Fixed RNG seed for reproducible output")]
    pub seed: Option<u64>,
    #[arg(long, help = "Cap on the number of synthesized products")]
    pub limit: Option<usize>,
}

pub fn run(mut options: LoadOptions, args: SynthesizeArgs) -> CommandResult {
    if args.seed.is_some() {
        options.overrides.catalog_seed = args.seed;
    }

    let config = match load_config("synthesize", options) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let mut rng = seeded_rng(config.catalog.seed);
    let cap = config.catalog.max_results.min(args.limit.unwrap_or(usize::MAX));
    let products = CatalogSynthesizer::new().with_max_results(cap).synthesize("", &mut rng);

    let message = format!("synthesized {} products", products.len());
    let data = serde_json::to_value(&products).unwrap_or(Value::Null);
    CommandResult::success_with_data("synthesize", message, data)
}
