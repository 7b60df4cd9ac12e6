//! Weighted random choice over a candidate list.

use rand::Rng;

/// Cumulative distribution over candidate weights, in candidate order.
///
/// Weights are normalized so the final cumulative value is (up to rounding)
/// `1.0`. A draw that lands past the last cumulative value because of
/// accumulated rounding resolves to the last candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeDistribution {
    cumulative: Vec<f64>,
    total: u64,
    last_positive: usize,
}

impl CumulativeDistribution {
    /// Build from raw weights. Returns `None` when there is nothing to draw
    /// from (no candidates, or every weight is zero).
    pub fn new<I>(weights: I) -> Option<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let weights: Vec<u32> = weights.into_iter().collect();
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return None;
        }

        let total_f = total as f64;
        let mut running = 0.0;
        let cumulative = weights
            .iter()
            .map(|&w| {
                running += f64::from(w) / total_f;
                running
            })
            .collect();

        let last_positive = weights.iter().rposition(|&w| w > 0).unwrap_or(0);

        Some(Self {
            cumulative,
            total,
            last_positive,
        })
    }

    /// Sum of the raw weights.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Index of the first candidate whose cumulative weight is `>= threshold`,
    /// falling back to the last candidate on overrun.
    ///
    /// Zero-weight candidates add nothing to the running sum and are skipped.
    pub fn pick(&self, threshold: f64) -> usize {
        let mut previous = 0.0;
        for (index, &c) in self.cumulative.iter().enumerate() {
            if c > previous && c >= threshold {
                return index;
            }
            previous = c;
        }
        self.last_positive
    }

    /// Draw a candidate index with probability proportional to its weight.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        self.pick(rng.random::<f64>())
    }
}
