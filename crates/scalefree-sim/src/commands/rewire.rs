use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use scalefree_gen::{RewireConfig, RewireGenerator};
use tracing::info;

use super::{load_document, print_json, wrong_generator, GeneratorDocument};
use crate::summary::{GraphSummary, RewireReport};

#[derive(Args, Debug)]
pub struct RewireArgs {
    /// YAML or JSON document with `generator: rewire`.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Overrides the configured number of rewiring iterations.
    #[arg(long)]
    pub iterations: Option<usize>,
    /// Overrides the configured seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn resolve(args: &RewireArgs) -> Result<RewireConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => match load_document(path)? {
            GeneratorDocument::Rewire(config) => config,
            other => return Err(wrong_generator(path, "rewire", other.kind())),
        },
        None => RewireConfig::default(),
    };
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

pub fn summarize(config: RewireConfig) -> Result<GraphSummary, Box<dyn Error>> {
    let seed = config.seed;
    let mut generator = RewireGenerator::new(config)?;
    let graph = generator.generate_graph()?;
    let summary = GraphSummary::describe("rewire", seed, &graph, None)?.with_rewire(RewireReport {
        smoothing_max_degree: generator.smoothing_max_degree(),
        stats: generator.last_stats(),
    });
    Ok(summary)
}

pub fn run(args: &RewireArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve(args)?;
    info!(
        seed = config.seed,
        vertices = config.num_vertices,
        iterations = config.iterations,
        "rewiring graph"
    );
    let summary = summarize(config)?;
    print_json(&summary)
}
