use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimConfig {
    pub servers: u32,
    pub customers: u32,
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub model: ModelConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn seed_label(&self) -> String {
        match self.seed {
            Some(seed) => format!("seeded({})", seed),
            None => "entropy".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ModelConfig {
    Mmc,
    Mgc,
}

impl fmt::Display for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelConfig::Mmc => write!(f, "mmc"),
            ModelConfig::Mgc => write!(f, "mgc"),
        }
    }
}
