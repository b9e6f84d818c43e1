use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use scalefree_gen::{EvolvingGenerator, GrowthConfig, GrowthGenerator};
use tracing::info;

use super::{load_document, print_json, wrong_generator, GeneratorDocument};
use crate::summary::GraphSummary;

#[derive(Args, Debug)]
pub struct GrowArgs {
    /// YAML or JSON document with `generator: growth`.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of time steps to evolve.
    #[arg(long, default_value_t = 100)]
    pub steps: usize,
    /// Overrides the configured seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn resolve(args: &GrowArgs) -> Result<GrowthConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => match load_document(path)? {
            GeneratorDocument::Growth(config) => config,
            other => return Err(wrong_generator(path, "growth", other.kind())),
        },
        None => GrowthConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

pub fn summarize(config: GrowthConfig, steps: usize) -> Result<GraphSummary, Box<dyn Error>> {
    let seed = config.seed;
    let mut generator = GrowthGenerator::new(config)?;
    generator.evolve_graph(steps)?;
    let summary = GraphSummary::describe(
        "growth",
        seed,
        generator.generate_graph(),
        Some(generator.num_elapsed_time_steps()),
    )?;
    Ok(summary)
}

pub fn run(args: &GrowArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve(args)?;
    info!(seed = config.seed, steps = args.steps, "growing graph");
    let summary = summarize(config, args.steps)?;
    print_json(&summary)
}
