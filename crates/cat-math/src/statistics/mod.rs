//! Incremental statistics accumulator.

use cat_core::Real;

/// Incremental statistics accumulator.
///
/// Accumulates samples and computes mean, variance, min, max, and count
/// without storing the samples.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: usize,
    sum: Real,
    sum_sq: Real,
    min: Real,
    max: Real,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
            min: Real::INFINITY,
            max: Real::NEG_INFINITY,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Add every sample of an iterator.
    pub fn add_all<I: IntoIterator<Item = Real>>(&mut self, xs: I) {
        for x in xs {
            self.add(x);
        }
    }

    /// Number of samples.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Sum of the samples.
    pub fn sum(&self) -> Real {
        self.sum
    }

    /// Sample mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then(|| self.sum / self.count as Real)
    }

    /// Unbiased (Bessel-corrected) variance.  Returns `None` for fewer than
    /// 2 samples.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as Real;
        let m = self.sum / n;
        Some(((self.sum_sq / n - m * m) * n / (n - 1.0)).max(0.0))
    }

    /// Minimum sample value.  Returns `None` if no samples have been added.
    pub fn minimum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.min)
    }

    /// Maximum sample value.  Returns `None` if no samples have been added.
    pub fn maximum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn basic_statistics() {
        let mut s = Statistics::new();
        s.add_all([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.samples(), 5);
        assert_relative_eq!(s.sum(), 15.0);
        assert_relative_eq!(s.mean().unwrap(), 3.0);
        assert_relative_eq!(s.variance().unwrap(), 2.5, epsilon = 1e-12);
        assert_eq!(s.minimum(), Some(1.0));
        assert_eq!(s.maximum(), Some(5.0));
    }

    #[test]
    fn empty_and_single_sample() {
        let mut s = Statistics::default();
        assert!(s.mean().is_none());
        assert!(s.variance().is_none());
        assert!(s.minimum().is_none());
        s.add(4.0);
        assert_eq!(s.mean(), Some(4.0));
        assert!(s.variance().is_none());
        assert_eq!((s.minimum(), s.maximum()), (Some(4.0), Some(4.0)));
    }
}
