use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CustomerRecord {
    pub inter_arrival_time: u64,
    pub arrival_time: u64,
    pub service_time: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub turnaround_time: u64,
    pub waiting_time: u64,
    pub response_time: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metrics {
    Sample(SampleMetrics),
    SteadyState(SteadyStateMetrics),
}

/// Empirical averages over one generated timeline, plus the
/// parameter-derived utilization split.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleMetrics {
    pub utilization_pct: f64,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub idle_pct: f64,
}

/// Erlang-C steady-state figures, independent of any one timeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SteadyStateMetrics {
    pub rho: f64,
    pub p0: f64,
    pub l: f64,
    pub lq: f64,
    pub w: f64,
    pub wq: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunMetadata {
    pub model: String,
    pub seed: String,
    pub customers: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    pub metadata: RunMetadata,
    pub customers: Vec<CustomerRecord>,
    pub metrics: Option<Metrics>,
}
