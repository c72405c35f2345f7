use crate::error::{Error, Result};
use crate::models::SimConfig;
use crate::state::{CustomerRecord, SampleMetrics, SteadyStateMetrics};

/// Averages one generated timeline. Callers skip empty runs.
pub fn sample_metrics(config: &SimConfig, records: &[CustomerRecord]) -> SampleMetrics {
    let count = records.len() as f64;
    let total_waiting: u64 = records.iter().map(|record| record.waiting_time).sum();
    let total_turnaround: u64 = records.iter().map(|record| record.turnaround_time).sum();
    let utilization_pct =
        config.arrival_rate / (config.servers as f64 * config.service_rate) * 100.0;

    SampleMetrics {
        utilization_pct,
        avg_waiting_time: total_waiting as f64 / count,
        avg_turnaround_time: total_turnaround as f64 / count,
        idle_pct: 100.0 - utilization_pct,
    }
}

/// Erlang-C steady-state metrics from the arrival and service rates alone.
///
/// Fails when the offered load cannot be served: ρ = λ/(c·μ) must stay
/// below 1 or the queue grows without bound.
pub fn steady_state(config: &SimConfig) -> Result<SteadyStateMetrics> {
    if config.arrival_rate <= 0.0 {
        return Err(Error::InvalidArrivalRate(config.arrival_rate));
    }
    if config.service_rate <= 0.0 {
        return Err(Error::InvalidServiceRate(config.service_rate));
    }

    let servers = config.servers;
    let offered_load = config.arrival_rate / config.service_rate;
    let rho = offered_load / servers as f64;
    if rho >= 1.0 {
        return Err(Error::Unstable(rho));
    }

    let mut normalization = 0.0;
    for n in 0..servers {
        normalization += offered_load.powi(n as i32) / factorial(n);
    }
    normalization +=
        offered_load.powi(servers as i32) / (factorial(servers) * (1.0 - rho));
    let p0 = 1.0 / normalization;

    let lq = p0 * offered_load.powi(servers as i32) * rho
        / (factorial(servers) * (1.0 - rho).powi(2));
    let l = lq + offered_load;
    let wq = lq / config.arrival_rate;
    let w = wq + 1.0 / config.service_rate;

    Ok(SteadyStateMetrics {
        rho,
        p0,
        l,
        lq,
        w,
        wq,
    })
}

// f64 accumulator; c! overflows u64 past 20 servers.
fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}
