//! Aggregate statistics over card scores.
//!
//! Mean and variance use Welford's running update, so long runs do not lose
//! precision the way `E[X^2] - E[X]^2` does. Variance is the population
//! variance.

use serde::{Deserialize, Serialize};

/// Running mean/variance accumulator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreAccumulator {
    count: u64,
    mean: f64,
    m2: f64,
}

impl ScoreAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one score.
    pub fn push(&mut self, score: u32) {
        self.count += 1;
        let x = f64::from(score);
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Number of scores seen.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sample mean, `0.0` when empty.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance, `0.0` when empty.
    #[must_use]
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Population standard deviation.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Extend<u32> for ScoreAccumulator {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for score in iter {
            self.push(score);
        }
    }
}

/// Nearest-rank percentiles of the score distribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentiles {
    pub p5: u32,
    pub p25: u32,
    pub p50: u32,
    pub p75: u32,
    pub p95: u32,
}

/// Summary of a run's card scores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreStatistics {
    pub count: u64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
    pub percentiles: Percentiles,
    /// `histogram[s]` counts trials with score `s`. Covers `0..=max_num`, and
    /// grows to the largest observed score when that is higher.
    pub histogram: Vec<u64>,
}

impl ScoreStatistics {
    /// Summarize `scores` for a game with `max_num` call values.
    ///
    /// Returns `None` for an empty sample.
    #[must_use]
    pub fn from_scores(scores: &[u32], max_num: u32) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mut acc = ScoreAccumulator::new();
        acc.extend(scores.iter().copied());

        let mut sorted = scores.to_vec();
        sorted.sort_unstable();

        let percentiles = Percentiles {
            p5: nearest_rank(&sorted, 5.0),
            p25: nearest_rank(&sorted, 25.0),
            p50: nearest_rank(&sorted, 50.0),
            p75: nearest_rank(&sorted, 75.0),
            p95: nearest_rank(&sorted, 95.0),
        };

        Some(Self {
            count: acc.count(),
            mean: acc.mean(),
            variance: acc.variance(),
            std_dev: acc.std_dev(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median: percentiles.p50,
            percentiles,
            histogram: histogram(scores, max_num),
        })
    }

    /// Share of trials won by round `round` (inclusive).
    #[must_use]
    pub fn win_probability_by(&self, round: u32) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let end = (round as usize + 1).min(self.histogram.len());
        let won: u64 = self.histogram[..end].iter().sum();
        won as f64 / self.count as f64
    }
}

/// Nearest-rank percentile of sorted, non-empty data.
fn nearest_rank(sorted: &[u32], percentile: f64) -> u32 {
    let rank = ((percentile / 100.0) * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Bins needed for `0..=max_num` and every score in the sample.
fn bin_count(scores: &[u32], max_num: u32) -> usize {
    scores.iter().copied().fold(max_num, u32::max) as usize + 1
}

/// Count scores per round over `0..=max_num`, extended to the largest score
/// when the sample goes past `max_num`.
#[must_use]
pub fn histogram(scores: &[u32], max_num: u32) -> Vec<u64> {
    let mut counts = vec![0u64; bin_count(scores, max_num)];
    for &score in scores {
        counts[score as usize] += 1;
    }
    counts
}

/// Histograms of growing prefixes of `scores`, one per frame.
///
/// Frame `i` covers the first `(i + 1) * scores.len() / frames` scores, so the
/// last frame is the full sample. Every frame has the bin count of
/// [`histogram`] over the full sample. This is the data behind an animated
/// view of the distribution converging.
#[must_use]
pub fn progressive_histograms(scores: &[u32], frames: usize, max_num: u32) -> Vec<Vec<u64>> {
    let mut counts = vec![0u64; bin_count(scores, max_num)];
    let mut consumed = 0;
    let mut out = Vec::with_capacity(frames);

    for frame in 0..frames {
        let end = (frame + 1) * scores.len() / frames;
        for &score in &scores[consumed..end] {
            counts[score as usize] += 1;
        }
        consumed = end;
        out.push(counts.clone());
    }
    out
}
