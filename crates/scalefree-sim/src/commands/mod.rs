pub mod ensemble;
pub mod grow;
pub mod rewire;
pub mod version;

use std::error::Error;
use std::path::Path;

use scalefree_gen::{load_config, GrowthConfig, RewireConfig};
use serde::{Deserialize, Serialize};

/// Configuration document naming the generator it configures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "generator", rename_all = "lowercase")]
pub enum GeneratorDocument {
    Growth(GrowthConfig),
    Rewire(RewireConfig),
}

impl GeneratorDocument {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Growth(_) => "growth",
            Self::Rewire(_) => "rewire",
        }
    }
}

pub fn load_document(path: &Path) -> Result<GeneratorDocument, Box<dyn Error>> {
    Ok(load_config(path)?)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn wrong_generator(path: &Path, expected: &str, found: &str) -> Box<dyn Error> {
    format!(
        "{} configures the {found} generator, expected {expected}",
        path.display()
    )
    .into()
}
