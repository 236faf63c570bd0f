use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named scalar reporters computed from live entity state after every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Reporter {
    /// Sum of every cleaner's step counter.
    TotalSteps,
    /// Mean of the cleaners' overlap counters, 0 without cleaners.
    MeanOverlaps,
    /// Share of cleaned stains in percent, 0 without stains.
    PercentStainsClean,
}

impl Reporter {
    pub const ALL: [Reporter; 3] = [
        Reporter::TotalSteps,
        Reporter::MeanOverlaps,
        Reporter::PercentStainsClean,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Reporter::TotalSteps => "totalSteps",
            Reporter::MeanOverlaps => "meanOverlaps",
            Reporter::PercentStainsClean => "percentStainsClean",
        }
    }
}

impl fmt::Display for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reporter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reporter::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| format!("unknown reporter: {s}"))
    }
}

/// One row of the metric history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub tick: u64,
    pub total_steps: u64,
    pub mean_overlaps: f64,
    pub percent_stains_clean: f64,
}

impl MetricRecord {
    #[must_use]
    pub fn value(&self, reporter: Reporter) -> f64 {
        match reporter {
            Reporter::TotalSteps => self.total_steps as f64,
            Reporter::MeanOverlaps => self.mean_overlaps,
            Reporter::PercentStainsClean => self.percent_stains_clean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_names_round_trip_through_from_str() {
        for r in Reporter::ALL {
            assert_eq!(r.name().parse::<Reporter>(), Ok(r));
        }
        assert!("Pasos".parse::<Reporter>().is_err());
    }

    #[test]
    fn test_record_serializes_with_reporter_names() {
        let rec = MetricRecord {
            tick: 2,
            total_steps: 20,
            mean_overlaps: 0.5,
            percent_stains_clean: 10.0,
        };
        let json = serde_json::to_value(rec).unwrap();
        for r in Reporter::ALL {
            assert_eq!(json[r.name()].as_f64(), Some(rec.value(r)));
        }
    }
}
