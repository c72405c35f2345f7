use crate::state::{Metrics, SampleMetrics, SimulationResult, SteadyStateMetrics};

pub trait Formatter {
    fn write(&self, result: &SimulationResult) -> String;
}

pub struct HumanFormatter;
pub struct SummaryFormatter;
pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = String::new();
        write_metadata(&mut out, result);
        if !result.customers.is_empty() {
            out.push_str("Timeline:\n");
            for (idx, record) in result.customers.iter().enumerate() {
                out.push_str(&format!(
                    "Customer {}: arrival {}, service {}, start {}, end {} (wait: {}, turnaround: {})\n",
                    idx + 1,
                    record.arrival_time,
                    record.service_time,
                    record.start_time,
                    record.end_time,
                    record.waiting_time,
                    record.turnaround_time
                ));
            }
        }
        write_metrics(&mut out, result);
        out
    }
}

impl Formatter for SummaryFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = String::new();
        write_metadata(&mut out, result);
        write_metrics(&mut out, result);
        out
    }
}

impl Formatter for JsonFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = serde_json::to_string_pretty(result).expect("simulation result serializes");
        out.push('\n');
        out
    }
}

fn write_metadata(out: &mut String, result: &SimulationResult) {
    out.push_str("Metadata:\n");
    out.push_str(&format!("model: {}\n", result.metadata.model));
    out.push_str(&format!("seed: {}\n", result.metadata.seed));
    out.push_str(&format!("customers: {}\n", result.metadata.customers));
}

fn write_metrics(out: &mut String, result: &SimulationResult) {
    if let Some(metrics) = &result.metrics {
        out.push_str("Metrics:\n");
        match metrics {
            Metrics::Sample(sample) => write_sample(out, sample),
            Metrics::SteadyState(steady) => write_steady_state(out, steady),
        }
    }
}

// Labels mirror the calculator's two metric tables.
fn write_sample(out: &mut String, metrics: &SampleMetrics) {
    out.push_str(&format!(
        "Utilization Factor (ρ): {:.2}%\n",
        metrics.utilization_pct
    ));
    out.push_str(&format!(
        "Average Waiting Time (AWT): {:.2}\n",
        metrics.avg_waiting_time
    ));
    out.push_str(&format!(
        "Average Turnaround Time (ATT): {:.2}\n",
        metrics.avg_turnaround_time
    ));
    out.push_str(&format!(
        "Proportion of Time the Server is Idle: {:.2}%\n",
        metrics.idle_pct
    ));
}

fn write_steady_state(out: &mut String, metrics: &SteadyStateMetrics) {
    out.push_str(&format!("L (Avg in System): {:.2}\n", metrics.l));
    out.push_str(&format!("Lq (Avg in Queue): {:.2}\n", metrics.lq));
    out.push_str(&format!("W (Avg Time in System): {:.2}\n", metrics.w));
    out.push_str(&format!("Wq (Avg Time in Queue): {:.2}\n", metrics.wq));
    out.push_str(&format!("ρ (Utilization): {:.2}\n", metrics.rho));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CustomerRecord, RunMetadata};

    fn steady_result() -> SimulationResult {
        SimulationResult {
            metadata: RunMetadata {
                model: "mgc".to_string(),
                seed: "seeded(42)".to_string(),
                customers: 5,
            },
            customers: vec![CustomerRecord {
                inter_arrival_time: 0,
                arrival_time: 0,
                service_time: 4,
                start_time: 0,
                end_time: 4,
                turnaround_time: 4,
                waiting_time: 0,
                response_time: 4,
            }],
            metrics: Some(Metrics::SteadyState(SteadyStateMetrics {
                rho: 2.0 / 3.0,
                p0: 1.0 / 3.0,
                l: 2.0,
                lq: 4.0 / 3.0,
                w: 1.0,
                wq: 2.0 / 3.0,
            })),
        }
    }

    #[test]
    fn summary_prints_metadata_and_metrics_only() {
        let expected = concat!(
            "Metadata:\n",
            "model: mgc\n",
            "seed: seeded(42)\n",
            "customers: 5\n",
            "Metrics:\n",
            "L (Avg in System): 2.00\n",
            "Lq (Avg in Queue): 1.33\n",
            "W (Avg Time in System): 1.00\n",
            "Wq (Avg Time in Queue): 0.67\n",
            "ρ (Utilization): 0.67\n",
        );
        assert_eq!(SummaryFormatter.write(&steady_result()), expected);
    }

    #[test]
    fn human_includes_the_timeline() {
        let output = HumanFormatter.write(&steady_result());
        assert!(output.contains("Timeline:\n"));
        assert!(output
            .contains("Customer 1: arrival 0, service 4, start 0, end 4 (wait: 0, turnaround: 4)"));
    }

    #[test]
    fn sample_metrics_render_percentage_labels() {
        let result = SimulationResult {
            metadata: RunMetadata {
                model: "mmc".to_string(),
                seed: "entropy".to_string(),
                customers: 2,
            },
            customers: Vec::new(),
            metrics: Some(Metrics::Sample(SampleMetrics {
                utilization_pct: 66.666_67,
                avg_waiting_time: 3.0,
                avg_turnaround_time: 6.0,
                idle_pct: 33.333_33,
            })),
        };
        let output = SummaryFormatter.write(&result);
        assert!(output.contains("Utilization Factor (ρ): 66.67%\n"));
        assert!(output.contains("Average Waiting Time (AWT): 3.00\n"));
        assert!(output.contains("Average Turnaround Time (ATT): 6.00\n"));
        assert!(output.contains("Proportion of Time the Server is Idle: 33.33%\n"));
    }

    #[test]
    fn empty_run_prints_metadata_alone() {
        let result = SimulationResult {
            metadata: RunMetadata {
                model: "mmc".to_string(),
                seed: "seeded(1)".to_string(),
                customers: 0,
            },
            customers: Vec::new(),
            metrics: None,
        };
        let expected = concat!(
            "Metadata:\n",
            "model: mmc\n",
            "seed: seeded(1)\n",
            "customers: 0\n",
        );
        assert_eq!(HumanFormatter.write(&result), expected);
        assert_eq!(SummaryFormatter.write(&result), expected);
    }

    #[test]
    fn json_serializes_the_whole_result() {
        let output = JsonFormatter.write(&steady_result());
        assert!(output.contains("\"customers\""));
        assert!(output.contains("\"steady-state\""));
        assert!(output.ends_with('\n'));
    }
}
