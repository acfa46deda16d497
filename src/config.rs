use crate::error::{PValueError, PvResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Reference configuration of the slide deck.
pub const REFERENCE_TRIALS: u32 = 10;
pub const REFERENCE_PROBABILITY: f64 = 0.5;
pub const REFERENCE_GUESSERS: usize = 80;
pub const REFERENCE_SEED: u64 = 42;
pub const REFERENCE_TAIL_THRESHOLD: u32 = 8;

/// Largest flip count per guesser the sampler accepts.
pub const MAX_TRIALS: u32 = 10_000;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Coin flips predicted by each guesser
    #[arg(long, default_value_t = REFERENCE_TRIALS)]
    pub trials: u32,

    /// Chance of a single correct guess under the null world
    #[arg(long, default_value_t = REFERENCE_PROBABILITY)]
    pub probability: f64,

    /// Number of simulated guessers (dots)
    #[arg(long, default_value_t = REFERENCE_GUESSERS)]
    pub guessers: usize,

    #[arg(long, default_value_t = REFERENCE_SEED)]
    pub seed: u64,

    /// Scores at or above this value count as the tail
    #[arg(long, default_value_t = REFERENCE_TAIL_THRESHOLD)]
    pub tail_threshold: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            trials: REFERENCE_TRIALS,
            probability: REFERENCE_PROBABILITY,
            guessers: REFERENCE_GUESSERS,
            seed: REFERENCE_SEED,
            tail_threshold: REFERENCE_TAIL_THRESHOLD,
        }
    }
}

impl SimulationParams {
    /// Reads params from JSON. Only field-local checks run here; cross-field
    /// checks wait for [`SimulationParams::validate`] after CLI flags merge in.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PvResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PValueError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let params: Self = serde_json::from_str(&content)?;
        validate_probability(params.probability)?;
        Ok(params)
    }

    /// Number of buckets, one per possible score `0..=trials`.
    pub fn bucket_count(&self) -> usize {
        self.trials as usize + 1
    }

    pub fn validate(&self) -> PvResult<()> {
        validate_probability(self.probability)?;
        validate_trials(self.trials)?;
        if self.tail_threshold > self.trials {
            return Err(PValueError::InvalidArgument(format!(
                "tail threshold {} exceeds trial count {}",
                self.tail_threshold, self.trials
            )));
        }
        Ok(())
    }

    /// Flags given explicitly on the command line win over file values.
    pub fn merge_from_cli(&mut self, cli: &SimulationParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(trials);
        update_if_present!(probability);
        update_if_present!(guessers);
        update_if_present!(seed);
        update_if_present!(tail_threshold);
    }
}

pub fn validate_probability(p: f64) -> PvResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(PValueError::InvalidArgument(format!(
            "probability {} is outside [0, 1]",
            p
        )));
    }
    Ok(())
}

pub fn validate_trials(trials: u32) -> PvResult<()> {
    if trials > MAX_TRIALS {
        return Err(PValueError::InvalidArgument(format!(
            "trial count {} exceeds maximum {}",
            trials, MAX_TRIALS
        )));
    }
    Ok(())
}
