use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config;
use crate::error::{Error, Result};
use crate::models::{ModelConfig, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "queue-sim", about = "Queueing system calculator (M/M/c and M/G/c)")]
pub struct Args {
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,
    #[arg(long)]
    pub servers: Option<u32>,
    #[arg(long)]
    pub customers: Option<u32>,
    #[arg(long)]
    pub arrival_rate: Option<f64>,
    #[arg(long)]
    pub service_rate: Option<f64>,
    #[arg(long, help = "Seed the random source; omit to draw from entropy")]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value = "human")]
    pub format: FormatArg,
    #[arg(long, help = "Load parameters from a TOML or JSON file")]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModelArg {
    Mmc,
    Mgc,
}

impl From<ModelArg> for ModelConfig {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::Mmc => ModelConfig::Mmc,
            ModelArg::Mgc => ModelConfig::Mgc,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

pub fn parse_args() -> Result<Args> {
    Args::try_parse().map_err(|e| Error::Cli(e.to_string()))
}

pub fn build_config(args: Args) -> Result<(SimConfig, FormatArg)> {
    let format = args.format;
    let config = match args.config {
        Some(path) => {
            let mut config = config::load_config(&path)?;
            if let Some(seed) = args.seed {
                config.seed = Some(seed);
            }
            config
        }
        None => SimConfig {
            servers: require(args.servers, "--servers")?,
            customers: require(args.customers, "--customers")?,
            arrival_rate: require(args.arrival_rate, "--arrival-rate")?,
            service_rate: require(args.service_rate, "--service-rate")?,
            model: require(args.model, "--model")?.into(),
            seed: args.seed,
        },
    };
    Ok((config, format))
}

fn require<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| Error::Cli(format!("{} is required without --config", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            model: Some(ModelArg::Mmc),
            servers: Some(2),
            customers: Some(5),
            arrival_rate: Some(2.0),
            service_rate: Some(3.0),
            seed: Some(42),
            format: FormatArg::Human,
            config: None,
        }
    }

    #[test]
    fn build_config_collects_flags() {
        let (config, _) = build_config(args()).expect("flags should build a config");
        assert_eq!(config.servers, 2);
        assert_eq!(config.customers, 5);
        assert_eq!(config.model, ModelConfig::Mmc);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn build_config_requires_each_flag_without_config_file() {
        let mut missing = args();
        missing.model = None;
        let err = build_config(missing).unwrap_err();
        assert_eq!(err.to_string(), "--model is required without --config");

        let mut missing = args();
        missing.arrival_rate = None;
        let err = build_config(missing).unwrap_err();
        assert_eq!(err.to_string(), "--arrival-rate is required without --config");
    }

    #[test]
    fn model_arg_maps_to_model_config() {
        assert_eq!(ModelConfig::from(ModelArg::Mmc), ModelConfig::Mmc);
        assert_eq!(ModelConfig::from(ModelArg::Mgc), ModelConfig::Mgc);
    }
}
