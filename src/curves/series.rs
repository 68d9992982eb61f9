//! Uniformly sampled curve data

/// Ordered `(t, value)` samples of a curve over `[0, end]`
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    points: Vec<(f64, f64)>,
}

impl SampleSeries {
    /// Sample `f` at `intervals + 1` evenly spaced points from 0 to `end`.
    pub fn sample<F>(end: f64, intervals: usize, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let intervals = intervals.max(1);
        let points = (0..=intervals)
            .map(|i| {
                let t = end * i as f64 / intervals as f64;
                (t, f(t))
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    /// Smallest and largest finite value, or `None` if there are none
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|&(_, v)| v)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
