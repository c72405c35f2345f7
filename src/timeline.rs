use rand::{Rng, RngCore};

use crate::models::SimConfig;
use crate::state::CustomerRecord;

/// Uniform integer source behind the timeline generator.
///
/// Blanket-implemented for every `rand` RNG; tests substitute scripted
/// sequences to pin down exact timelines.
pub trait UniformSource {
    /// Uniform integer in `[lo, hi)`.
    fn uniform(&mut self, lo: u64, hi: u64) -> u64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    fn uniform(&mut self, lo: u64, hi: u64) -> u64 {
        self.gen_range(lo..hi)
    }
}

/// Builds the per-customer timeline in arrival order.
///
/// Assumes an already-validated config: at least one server, positive rates.
pub fn generate(config: &SimConfig, source: &mut dyn UniformSource) -> Vec<CustomerRecord> {
    let mut pool = vec![0u64; config.servers as usize];
    let mut records = Vec::with_capacity(config.customers as usize);
    let mut arrival_time = 0u64;

    for idx in 0..config.customers {
        let inter_arrival_time = if idx == 0 { 0 } else { source.uniform(0, 10) };
        let service_time = source.uniform(1, 11);
        arrival_time += inter_arrival_time;

        let server_idx = earliest_server(&pool);
        let start_time = arrival_time.max(pool[server_idx]);
        let end_time = start_time + service_time;
        pool[server_idx] = end_time;

        let waiting_time = start_time - arrival_time;
        records.push(CustomerRecord {
            inter_arrival_time,
            arrival_time,
            service_time,
            start_time,
            end_time,
            turnaround_time: end_time - arrival_time,
            waiting_time,
            response_time: waiting_time + service_time,
        });
    }

    records
}

// Lowest index wins ties so repeated runs assign identically.
fn earliest_server(pool: &[u64]) -> usize {
    let mut best = 0;
    for (idx, &free_at) in pool.iter().enumerate().skip(1) {
        if free_at < pool[best] {
            best = idx;
        }
    }
    best
}
