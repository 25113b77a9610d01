//! Monte Carlo runner: generate a card, score it, repeat.
//!
//! Sequential runs draw every card from one RNG seeded with the configured
//! seed. Parallel runs split the trials into fixed-size chunks; chunk `i`
//! draws from `SimRng::new(seed).fork_at(i)` and writes into its own slice of
//! the result vector, so no locking is needed and the output is the same for
//! any thread count.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use super::stats::ScoreStatistics;
use crate::card::CardGenerator;
use crate::core::{SimRng, SimulationConfig, SimulationError};
use crate::scoring::ScoreEvaluator;

/// Scores collected by one run.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Configuration the run used.
    pub config: SimulationConfig,

    /// Card score of each trial, in trial order.
    pub scores: Vec<u32>,

    /// Wall-clock time spent on the trials.
    pub elapsed: Duration,
}

impl SimulationResult {
    /// Aggregate statistics, `None` for a zero-iteration run.
    #[must_use]
    pub fn statistics(&self) -> Option<ScoreStatistics> {
        ScoreStatistics::from_scores(&self.scores, self.config.max_num)
    }

    /// Trials per second.
    #[must_use]
    pub fn trials_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.scores.len() as f64 / secs
        }
    }
}

/// Runs trials for a validated configuration.
#[derive(Clone, Debug)]
pub struct SimulationRunner {
    config: SimulationConfig,
    generator: CardGenerator,
    evaluator: ScoreEvaluator,
    cancel: Option<Arc<AtomicBool>>,
}

impl SimulationRunner {
    /// Validate `config` and build a runner.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let generator = CardGenerator::new(config.max_num)?;
        Ok(Self {
            config,
            generator,
            evaluator: ScoreEvaluator::new(),
            cancel: None,
        })
    }

    /// Stop between trials once `flag` is set.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Configuration this runner was built with.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// One generate-then-score cycle.
    pub fn trial(&self, rng: &mut SimRng) -> u32 {
        let card = self.generator.generate(rng);
        self.evaluator.card_score(&card)
    }

    /// Run the configured number of trials.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        let config = &self.config;
        let span = info_span!("simulation", seed = config.seed, parallel = config.parallel);
        let _enter = span.enter();

        info!(
            iterations = config.iterations,
            max_num = config.max_num,
            "starting simulation"
        );
        let start = Instant::now();

        let scores = if config.parallel {
            self.run_parallel()
        } else {
            self.run_sequential(&mut SimRng::new(config.seed), config.iterations)
        };
        let scores = match scores {
            Ok(scores) => scores,
            Err(err) => {
                warn!(error = %err, "simulation aborted");
                return Err(err);
            }
        };

        let elapsed = start.elapsed();
        info!(
            trials = scores.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "simulation finished"
        );

        Ok(SimulationResult {
            config: config.clone(),
            scores,
            elapsed,
        })
    }

    /// Run `iterations` trials drawing from `rng`.
    ///
    /// The RNG is left positioned after the last card, so a run can be
    /// checkpointed with [`SimRng::state`] and continued later.
    pub fn run_sequential(
        &self,
        rng: &mut SimRng,
        iterations: usize,
    ) -> Result<Vec<u32>, SimulationError> {
        let mut scores = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            if self.is_cancelled() {
                return Err(SimulationError::Cancelled {
                    requested: iterations,
                });
            }
            scores.push(self.trial(rng));
        }
        Ok(scores)
    }

    fn run_parallel(&self) -> Result<Vec<u32>, SimulationError> {
        let iterations = self.config.iterations;
        let chunk_size = self.config.chunk_size;
        let root = SimRng::new(self.config.seed);

        debug!(
            chunks = iterations.div_ceil(chunk_size),
            chunk_size,
            threads = rayon::current_num_threads(),
            "dispatching parallel trials"
        );

        let mut scores = vec![0u32; iterations];
        scores
            .par_chunks_mut(chunk_size)
            .enumerate()
            .try_for_each(|(index, slots)| {
                let mut rng = root.fork_at(index as u64);
                for slot in slots.iter_mut() {
                    if self.is_cancelled() {
                        return Err(());
                    }
                    *slot = self.trial(&mut rng);
                }
                Ok(())
            })
            .map_err(|()| SimulationError::Cancelled {
                requested: iterations,
            })?;

        Ok(scores)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Validate `config` and run it.
pub fn simulate(config: SimulationConfig) -> Result<SimulationResult, SimulationError> {
    SimulationRunner::new(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;

    fn small(parallel: bool) -> SimulationConfig {
        SimulationConfig::new()
            .with_iterations(500)
            .with_seed(7)
            .with_parallel(parallel)
            .with_chunk_size(64)
    }

    #[test]
    fn test_sequential_is_deterministic() {
        let a = simulate(small(false)).unwrap();
        let b = simulate(small(false)).unwrap();
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.scores.len(), 500);
    }

    #[test]
    fn test_parallel_is_deterministic() {
        let a = simulate(small(true)).unwrap();
        let b = simulate(small(true)).unwrap();
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.scores.len(), 500);
    }

    #[test]
    fn test_parallel_matches_manual_chunks() {
        let config = small(true);
        let runner = SimulationRunner::new(config.clone()).unwrap();
        let result = runner.run().unwrap();

        let root = SimRng::new(config.seed);
        let mut expected = Vec::new();
        for (index, chunk) in (0..config.iterations).collect::<Vec<_>>().chunks(64).enumerate() {
            let mut rng = root.fork_at(index as u64);
            expected.extend(runner.run_sequential(&mut rng, chunk.len()).unwrap());
        }
        assert_eq!(result.scores, expected);
    }

    #[test]
    fn test_scores_in_range() {
        let result = simulate(small(false)).unwrap();
        // A 4-cell line needs at least 4 calls; no card can outlast its last value.
        assert!(result.scores.iter().all(|&s| (4..=75).contains(&s)));
    }

    #[test]
    fn test_checkpoint_resume() {
        let runner = SimulationRunner::new(small(false)).unwrap();

        let mut rng = SimRng::new(7);
        let mut resumed = runner.run_sequential(&mut rng, 200).unwrap();
        let state = rng.state();
        let mut restored = SimRng::from_state(&state);
        resumed.extend(runner.run_sequential(&mut restored, 300).unwrap());

        assert_eq!(resumed, simulate(small(false)).unwrap().scores);
    }

    #[test]
    fn test_invalid_config_aborts() {
        let result = simulate(SimulationConfig::new().with_max_num(12));
        assert!(matches!(
            result,
            Err(SimulationError::Engine(EngineError::InvalidConfiguration { max_num: 12 }))
        ));
    }

    #[test]
    fn test_cancelled_run() {
        let flag = Arc::new(AtomicBool::new(true));
        for parallel in [false, true] {
            let runner = SimulationRunner::new(small(parallel))
                .unwrap()
                .with_cancel_flag(flag.clone());
            assert!(matches!(
                runner.run(),
                Err(SimulationError::Cancelled { requested: 500 })
            ));
        }
    }

    #[test]
    fn test_zero_iterations() {
        let result = simulate(small(false).with_iterations(0)).unwrap();
        assert!(result.scores.is_empty());
        assert!(result.statistics().is_none());
    }
}
