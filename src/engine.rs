use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::metrics;
use crate::models::{ModelConfig, SimConfig};
use crate::state::{Metrics, RunMetadata, SimulationResult};
use crate::timeline;

pub struct SimulationEngine {
    pub config: SimConfig,
    pub rng: StdRng,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn run(&mut self) -> Result<SimulationResult> {
        validate_config(&self.config)?;

        let customers = timeline::generate(&self.config, &mut self.rng);
        let metrics = if customers.is_empty() {
            None
        } else {
            Some(match self.config.model {
                ModelConfig::Mmc => {
                    Metrics::Sample(metrics::sample_metrics(&self.config, &customers))
                }
                ModelConfig::Mgc => Metrics::SteadyState(metrics::steady_state(&self.config)?),
            })
        };

        Ok(SimulationResult {
            metadata: RunMetadata {
                model: self.config.model.to_string(),
                seed: self.config.seed_label(),
                customers: self.config.customers,
            },
            customers,
            metrics,
        })
    }
}

pub fn run_simulation(config: &SimConfig) -> Result<SimulationResult> {
    SimulationEngine::new(config.clone()).run()
}

fn validate_config(config: &SimConfig) -> Result<()> {
    if config.servers == 0 {
        return Err(Error::ServersZero);
    }
    if !config.arrival_rate.is_finite() || config.arrival_rate <= 0.0 {
        return Err(Error::InvalidArrivalRate(config.arrival_rate));
    }
    if !config.service_rate.is_finite() || config.service_rate <= 0.0 {
        return Err(Error::InvalidServiceRate(config.service_rate));
    }
    Ok(())
}
