// ---------------------------------------------------------------------------
// Population statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divisor N, not N - 1).
/// `None` for an empty slice; `0.0` for a single value.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// The one-sigma band around a sample mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonBounds {
    pub mean: f64,
    pub std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

impl SeasonBounds {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev,
            lower: mean - std_dev,
            upper: mean + std_dev,
        }
    }

    pub fn from_sample(values: &[f64]) -> Option<Self> {
        Some(Self::new(mean(values)?, population_std_dev(values)?))
    }

    /// Strictly outside `[lower, upper]`; the bounds themselves are inside.
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn std_dev_divides_by_n() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&values).unwrap(), 5.0);
        assert_relative_eq!(population_std_dev(&values).unwrap(), 2.0);
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_eq!(population_std_dev(&[3.5]), Some(0.0));
        let bounds = SeasonBounds::from_sample(&[3.5]).unwrap();
        assert_eq!((bounds.lower, bounds.upper), (3.5, 3.5));
    }

    #[test]
    fn empty_sample_has_no_statistics() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
        assert!(SeasonBounds::from_sample(&[]).is_none());
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = SeasonBounds::from_sample(&[10.0, 20.0, 30.0]).unwrap();
        assert_relative_eq!(bounds.std_dev, 8.164_965_809, epsilon = 1e-9);
        assert!(!bounds.is_outside(bounds.lower));
        assert!(!bounds.is_outside(bounds.upper));
        assert!(bounds.is_outside(bounds.lower - 1e-9));
        assert!(bounds.is_outside(bounds.upper + 1e-9));
    }
}
