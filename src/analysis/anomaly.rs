use log::debug;

use super::sample::SeasonalSample;
use super::stats::SeasonBounds;

/// Outcome of comparing one reading with the one-sigma band of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyVerdict {
    pub reading: f64,
    pub bounds: SeasonBounds,
    pub is_anomaly: bool,
}

/// Compare `reading` with `mean ± σ` of `sample` (population σ).
///
/// A single-value sample has σ = 0, so every reading other than that value
/// is anomalous.
pub fn assess(sample: &SeasonalSample, reading: f64) -> AnomalyVerdict {
    let bounds = sample.bounds();
    let is_anomaly = bounds.is_outside(reading);
    debug!(
        "reading {reading} vs [{:.3}, {:.3}] (n={}): anomaly={is_anomaly}",
        bounds.lower,
        bounds.upper,
        sample.len()
    );
    AnomalyVerdict {
        reading,
        bounds,
        is_anomaly,
    }
}

/// `true` iff `reading` lies strictly outside `[mean - σ, mean + σ]`.
pub fn detect_anomaly(sample: &SeasonalSample, reading: f64) -> bool {
    assess(sample, reading).is_anomaly
}
