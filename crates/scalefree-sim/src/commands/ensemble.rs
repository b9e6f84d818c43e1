use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use scalefree_gen::replica_seed;
use serde::Serialize;
use tracing::{debug, info};

use super::{grow, load_document, print_json, rewire, GeneratorDocument};
use crate::summary::GraphSummary;

#[derive(Args, Debug)]
pub struct EnsembleArgs {
    /// YAML or JSON document naming the generator and its parameters.
    #[arg(long)]
    pub config: PathBuf,
    /// Number of independent replicas.
    #[arg(long, default_value_t = 4)]
    pub replicas: usize,
    /// Time steps per replica for growth generators.
    #[arg(long, default_value_t = 100)]
    pub steps: usize,
    /// Master seed replica seeds are derived from; defaults to the configured seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct EnsembleSummary {
    generator: &'static str,
    master_seed: u64,
    replicas: Vec<ReplicaSummary>,
}

#[derive(Debug, Serialize)]
struct ReplicaSummary {
    replica: usize,
    #[serde(flatten)]
    summary: GraphSummary,
}

pub fn run(args: &EnsembleArgs) -> Result<(), Box<dyn Error>> {
    let document = load_document(&args.config)?;
    let master_seed = args.seed.unwrap_or(match &document {
        GeneratorDocument::Growth(config) => config.seed,
        GeneratorDocument::Rewire(config) => config.seed,
    });
    info!(
        generator = document.kind(),
        replicas = args.replicas,
        master_seed,
        "running ensemble"
    );

    let mut replicas = Vec::with_capacity(args.replicas);
    for replica in 0..args.replicas {
        let seed = replica_seed(master_seed, replica);
        let summary = match &document {
            GeneratorDocument::Growth(config) => {
                let mut config = config.clone();
                config.seed = seed;
                grow::summarize(config, args.steps)?
            }
            GeneratorDocument::Rewire(config) => {
                let mut config = config.clone();
                config.seed = seed;
                rewire::summarize(config)?
            }
        };
        debug!(replica, seed, hash = %summary.hash, "replica finished");
        replicas.push(ReplicaSummary { replica, summary });
    }

    print_json(&EnsembleSummary {
        generator: document.kind(),
        master_seed,
        replicas,
    })
}
