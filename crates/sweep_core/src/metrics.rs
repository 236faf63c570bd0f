//! Metrics collection for a run.
//!
//! The collector recomputes every reporter from live entity state once per
//! tick and appends the result to an ordered history, which chart and report
//! consumers read by reporter name.

use crate::population::Population;
use crate::systems::stats;
use serde::{Deserialize, Serialize};
use sweep_data::{MetricRecord, Reporter};

/// Ordered per-tick metric records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsHistory {
    records: Vec<MetricRecord>,
}

impl MetricsHistory {
    #[must_use]
    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MetricRecord> {
        self.records.last()
    }

    /// One reporter's values across the whole history, in tick order.
    #[must_use]
    pub fn series(&self, reporter: Reporter) -> Vec<f64> {
        self.records.iter().map(|r| r.value(reporter)).collect()
    }

    /// Header plus one line per record, columns in [`Reporter::ALL`] order.
    #[must_use]
    pub fn to_csv(&self) -> String {
        self.to_csv_columns(&Reporter::ALL)
    }

    /// Like [`to_csv`](Self::to_csv), restricted to `reporters` in the given
    /// order. The tick column always comes first.
    #[must_use]
    pub fn to_csv_columns(&self, reporters: &[Reporter]) -> String {
        let mut out = String::from("tick");
        for r in reporters {
            out.push(',');
            out.push_str(r.name());
        }
        out.push('\n');
        for rec in &self.records {
            out.push_str(&rec.tick.to_string());
            for &r in reporters {
                out.push(',');
                out.push_str(&rec.value(r).to_string());
            }
            out.push('\n');
        }
        out
    }
}

/// Records reporter values after every tick.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    history: MetricsHistory,
    log_interval: u64,
}

impl MetricsCollector {
    /// `log_interval` of 0 disables the periodic info line.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            history: MetricsHistory::default(),
            log_interval,
        }
    }

    /// Computes a fresh record for `tick` and appends it to the history.
    pub fn collect(&mut self, tick: u64, population: &Population) -> MetricRecord {
        let record = stats::compute_record(tick, population);
        tracing::debug!(
            tick,
            total_steps = record.total_steps,
            mean_overlaps = record.mean_overlaps,
            percent_stains_clean = record.percent_stains_clean,
            "metrics recorded"
        );
        if self.log_interval > 0 && tick % self.log_interval == 0 {
            tracing::info!(
                tick,
                total_steps = record.total_steps,
                mean_overlaps = record.mean_overlaps,
                percent_stains_clean = record.percent_stains_clean,
                "Simulation tick"
            );
        }
        self.history.records.push(record);
        record
    }

    #[must_use]
    pub fn history(&self) -> &MetricsHistory {
        &self.history
    }
}

/// Initialize tracing subscriber for logging. Honors `RUST_LOG`, defaulting
/// to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
