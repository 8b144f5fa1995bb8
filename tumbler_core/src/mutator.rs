use crate::config::MutateConfig;
use crate::corpus::Corpus;
use crate::dictionary::Dictionary;
use crate::feedback::FeedbackDictionary;
use crate::geometry::MangleRun;
use crate::input::MutableInput;
use crate::ops::MangleOp;
use crate::random::uniform;
use crate::timing::CoverageClock;
use rand::Rng;
use std::sync::atomic::{Ordering, fence};

/// Speed factor below which the mutation count is drawn uniformly.
const SLOW_SPEED_FACTOR: i64 = 5;
/// Speed factor from which the count is scaled up.
const FAST_SPEED_FACTOR: i64 = 10;

/// A `Mutator` rewrites an input in place to produce the next test case.
///
/// Mutators are the core engine for generating new test cases from existing ones in a
/// fuzzing loop. The caller owns the buffer and decides what to do with the result.
///
/// # Type Parameters
/// * `I`: The type of `MutableInput` this mutator operates on.
/// * `R`: The type of random number generator used for mutation decisions.
pub trait Mutator<I: MutableInput, R: Rng + ?Sized> {
    /// Applies a mutation pass to `input`.
    ///
    /// # Arguments
    /// * `input`: The buffer to mutate. It never grows past `input.max_size()`.
    /// * `rng`: A mutable reference to a random number generator.
    /// * `speed_factor`: Scaled executions-per-second of the driving fuzzer; faster
    ///   targets receive more operators per pass.
    fn mutate(&mut self, input: &mut I, rng: &mut R, speed_factor: i64);
}

/// Collaborators shared by every mutation pass.
///
/// Feedback, corpus and clock are optional. Operators that depend on a missing one
/// fall back to random bytes.
#[derive(Clone, Copy)]
pub struct MangleEnv<'e> {
    pub config: &'e MutateConfig,
    pub dictionary: &'e Dictionary,
    pub feedback: Option<&'e dyn FeedbackDictionary>,
    pub corpus: Option<&'e dyn Corpus<Vec<u8>>>,
    pub clock: Option<&'e dyn CoverageClock>,
}

impl<'e> MangleEnv<'e> {
    pub fn new(config: &'e MutateConfig, dictionary: &'e Dictionary) -> Self {
        Self {
            config,
            dictionary,
            feedback: None,
            corpus: None,
            clock: None,
        }
    }

    pub fn with_feedback(mut self, feedback: &'e dyn FeedbackDictionary) -> Self {
        self.feedback = Some(feedback);
        self
    }

    pub fn with_corpus(mut self, corpus: &'e dyn Corpus<Vec<u8>>) -> Self {
        self.corpus = Some(corpus);
        self
    }

    pub fn with_clock(mut self, clock: &'e dyn CoverageClock) -> Self {
        self.clock = Some(clock);
        self
    }
}

/// Number of operators to apply in one pass.
///
/// Slow targets get a uniform count in `[1, mutations_per_run]`, medium ones exactly
/// `mutations_per_run`, and fast ones five times as many.
pub fn changes_count<R: Rng + ?Sized>(
    rng: &mut R,
    speed_factor: i64,
    mutations_per_run: u64,
) -> u64 {
    if speed_factor < SLOW_SPEED_FACTOR {
        uniform(rng, 1, mutations_per_run)
    } else if speed_factor < FAST_SPEED_FACTOR {
        mutations_per_run
    } else {
        let floor = speed_factor.min(FAST_SPEED_FACTOR) as u64;
        floor.max(mutations_per_run.saturating_mul(5))
    }
}

/// Content mangler driving the operator library.
///
/// Each pass applies a speed-dependent number of operators drawn uniformly from
/// [`MangleOp::LIBRARY`], favouring the feedback dictionary when one is attached and
/// forcing a splice when coverage has gone stale.
pub struct Mangler<'e> {
    env: MangleEnv<'e>,
}

impl<'e> Mangler<'e> {
    pub fn new(env: MangleEnv<'e>) -> Self {
        Self { env }
    }

    pub fn mangle_content<I: MutableInput, R: Rng>(
        &self,
        input: &mut I,
        rng: &mut R,
        speed_factor: i64,
    ) {
        let config = self.env.config;
        if config.mutations_per_run == 0 {
            return;
        }
        let printable = config.printable_only;

        let mut run = MangleRun::new(input, rng, self.env);
        if run.size() == 0 {
            run.apply(MangleOp::Resize, printable);
        }
        let changes = changes_count(&mut *run.rng, speed_factor, config.mutations_per_run);

        if let Some(clock) = self.env.clock {
            if clock.is_stale() && run.coin() {
                log::debug!(
                    "no new coverage for {}s, forcing a splice",
                    clock.secs_since_last_cov()
                );
                run.apply(MangleOp::Splice, printable);
            }
        }

        for _ in 0..changes {
            let op = if self.env.feedback.is_some() && run.coin() {
                MangleOp::ConstFeedbackDict
            } else {
                let idx = run.uniform(0, MangleOp::LIBRARY.len() as u64 - 1) as usize;
                MangleOp::LIBRARY[idx]
            };
            run.apply(op, printable);
        }

        // Publish the finished buffer to whoever runs it next.
        fence(Ordering::Release);
    }
}

impl<I: MutableInput, R: Rng> Mutator<I, R> for Mangler<'_> {
    fn mutate(&mut self, input: &mut I, rng: &mut R, speed_factor: i64) {
        self.mangle_content(input, rng, speed_factor);
    }
}
