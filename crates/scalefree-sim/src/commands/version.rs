use std::error::Error;

use clap::Args;
use scalefree_core::SamplingBudget;
use serde::Serialize;

use super::print_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the supported generators and default sampling budget as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    generators: [&'static str; 2],
    default_budget: SamplingBudget,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    print_json(&VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        generators: ["growth", "rewire"],
        default_budget: SamplingBudget::default(),
    })
}
