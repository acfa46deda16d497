use crate::config::{validate_probability, validate_trials, SimulationParams};
use crate::error::PvResult;
use fastrand::Rng;
use tracing::debug;

/// Seeded source of binomial outcomes. Owns its generator so two samplers
/// built from the same seed replay the same draws.
pub struct Sampler {
    rng: Rng,
    trials: u32,
    probability: f64,
}

impl Sampler {
    pub fn new(trials: u32, probability: f64, seed: u64) -> PvResult<Self> {
        validate_probability(probability)?;
        validate_trials(trials)?;
        Ok(Self {
            rng: Rng::with_seed(seed),
            trials,
            probability,
        })
    }

    pub fn from_params(params: &SimulationParams) -> PvResult<Self> {
        Self::new(params.trials, params.probability, params.seed)
    }

    /// One guesser: the number of correct calls out of `trials` flips.
    #[inline(always)]
    pub fn draw(&mut self) -> u32 {
        let mut hits = 0;
        for _ in 0..self.trials {
            if self.rng.f64() < self.probability {
                hits += 1;
            }
        }
        hits
    }

    pub fn draw_many(&mut self, count: usize) -> Vec<u32> {
        let outcomes: Vec<u32> = (0..count).map(|_| self.draw()).collect();
        debug!(
            "Drew {} outcomes of binomial({}, {})",
            outcomes.len(),
            self.trials,
            self.probability
        );
        outcomes
    }
}

/// Fresh sampler per call: identical params always give identical outcomes.
pub fn draw_outcomes(params: &SimulationParams) -> PvResult<Vec<u32>> {
    params.validate()?;
    let mut sampler = Sampler::from_params(params)?;
    Ok(sampler.draw_many(params.guessers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_probabilities_are_exact() {
        let mut never = Sampler::new(10, 0.0, 1).unwrap();
        let mut always = Sampler::new(10, 1.0, 1).unwrap();
        assert!(never.draw_many(50).iter().all(|&k| k == 0));
        assert!(always.draw_many(50).iter().all(|&k| k == 10));
    }

    #[test]
    fn rejects_probability_out_of_range() {
        assert!(Sampler::new(10, 1.5, 1).is_err());
        assert!(Sampler::new(10, -0.1, 1).is_err());
        assert!(Sampler::new(10, f64::NAN, 1).is_err());
    }

    #[test]
    fn rejects_absurd_trial_count() {
        assert!(Sampler::new(u32::MAX, 0.5, 1).is_err());
        assert!(Sampler::new(crate::config::MAX_TRIALS, 0.5, 1).is_ok());
    }
}
