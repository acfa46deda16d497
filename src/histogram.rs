use crate::binner::{assign_slots, Slot};
use crate::config::SimulationParams;
use crate::error::PvResult;
use crate::layout::{self, PlacedDot, ViewScale};
use crate::sampler;
use crate::stats;
use serde::Serialize;
use tracing::info;

/// One simulated null world: the outcomes, their column slots and the
/// per-column counts. Every view of the deck is laid out from the same
/// instance so they agree on which guessers land in the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    params: SimulationParams,
    outcomes: Vec<u32>,
    slots: Vec<Slot>,
    counts: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TailSummary {
    pub threshold: u32,
    pub tail_count: usize,
    pub guessers: usize,
    pub simulated_fraction: f64,
    pub exact_p_value: f64,
}

impl Histogram {
    pub fn generate(params: &SimulationParams) -> PvResult<Self> {
        let outcomes = sampler::draw_outcomes(params)?;
        let (slots, counts) = assign_slots(&outcomes, params.bucket_count());
        let hist = Self {
            params: params.clone(),
            outcomes,
            slots,
            counts,
        };
        info!(
            "Built histogram: {} guessers, seed {}, {} in tail (>= {})",
            hist.len(),
            params.seed,
            hist.tail_count(),
            params.tail_threshold
        );
        Ok(hist)
    }

    /// Rebuilds from the stored seed. Equal to `self` by construction.
    pub fn regenerate(&self) -> PvResult<Self> {
        Self::generate(&self.params)
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn outcomes(&self) -> &[u32] {
        &self.outcomes
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn column_count(&self, bucket: u32) -> usize {
        self.counts.get(bucket as usize).copied().unwrap_or(0)
    }

    pub fn is_tail(&self, outcome: u32) -> bool {
        outcome >= self.params.tail_threshold
    }

    /// Draw indices of the guessers scoring at or above the threshold.
    pub fn tail_guessers(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter(|s| self.is_tail(s.bucket))
            .map(|s| s.guesser)
            .collect()
    }

    pub fn tail_count(&self) -> usize {
        self.outcomes.iter().filter(|&&k| self.is_tail(k)).count()
    }

    pub fn tail_summary(&self) -> PvResult<TailSummary> {
        let tail_count = self.tail_count();
        Ok(TailSummary {
            threshold: self.params.tail_threshold,
            tail_count,
            guessers: self.len(),
            simulated_fraction: stats::tail_fraction(tail_count, self.len())?,
            exact_p_value: stats::upper_tail(
                self.params.trials,
                self.params.tail_threshold,
                self.params.probability,
            )?,
        })
    }

    pub fn view(&self, scale: ViewScale) -> Vec<PlacedDot> {
        let axis = scale.axis(self.params.trials);
        let style = scale.dot_style();
        layout::layout_dots(&self.slots, &axis, &style, self.params.tail_threshold)
    }

    /// Top edge of a column in the given view; annotations anchor here.
    pub fn column_top(&self, scale: ViewScale, bucket: u32) -> f64 {
        let axis = scale.axis(self.params.trials);
        layout::column_top(&axis, &scale.dot_style(), self.column_count(bucket))
    }

    /// Dots ordered left to right for the sweeping reveal. Dots sharing a
    /// column keep their draw order.
    pub fn sweep_order(&self, scale: ViewScale) -> Vec<PlacedDot> {
        let mut dots = self.view(scale);
        dots.sort_by(|a, b| a.x.total_cmp(&b.x));
        dots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regenerate_matches_cached_sample() {
        let hist = Histogram::generate(&SimulationParams::default()).unwrap();
        assert_eq!(hist, hist.regenerate().unwrap());
    }

    #[test]
    fn column_top_sits_on_highest_dot() {
        let hist = Histogram::generate(&SimulationParams::default()).unwrap();
        let style = ViewScale::Full.dot_style();
        let peak = (0..=10u32).max_by_key(|&k| hist.column_count(k)).unwrap();
        let highest = hist
            .view(ViewScale::Full)
            .into_iter()
            .filter(|d| d.outcome == peak)
            .map(|d| d.y)
            .fold(f64::MIN, f64::max);
        let top = hist.column_top(ViewScale::Full, peak);
        assert!((top - (highest + style.radius)).abs() < 1e-9);
    }
}
