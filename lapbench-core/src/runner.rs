//! Benchmark Runner - Warmup + Measured Passes
//!
//! A runner is configured once with a description and up to three stages:
//! - pre: untimed transform of each supplied input (optional)
//! - run: the operation under study, mutating its input in place (required)
//! - post: untimed check of the mutated value (optional)
//!
//! Each call to [`BenchmarkRunner::run`] performs a short warmup pass and then
//! the measured pass, each on a fresh [`Timer`].

use crate::format::format_whole;
use crate::measure::{Timer, TimerError};
use tracing::Dispatch;

/// Warmup repetitions never drop below this
pub const MIN_WARMUP_RUNS: usize = 2;

/// Warmup repetitions never exceed this
pub const MAX_WARMUP_RUNS: usize = 10;

type PreFn<T> = Box<dyn Fn(T) -> T>;
type RunFn<T> = Box<dyn Fn(&mut T)>;
type PostFn<T> = Box<dyn Fn(&T)>;

/// Number of warmup repetitions for `m` measured repetitions: `m / 10`
/// clamped to `[MIN_WARMUP_RUNS, MAX_WARMUP_RUNS]`.
pub fn warmup_runs(m: usize) -> usize {
    (m / 10).clamp(MIN_WARMUP_RUNS, MAX_WARMUP_RUNS)
}

/// Measures the mean time of a mutating operation.
///
/// The run stage receives `&mut T` and returns nothing; the harness hands the
/// same value to the post stage afterwards, so a sort routine can be verified
/// on the array it just sorted.
pub struct BenchmarkRunner<T> {
    description: String,
    pre: Option<PreFn<T>>,
    run: RunFn<T>,
    post: Option<PostFn<T>>,
    dispatch: Option<Dispatch>,
}

impl<T> BenchmarkRunner<T> {
    /// Create a runner with only the timed stage
    pub fn new(description: impl Into<String>, run: impl Fn(&mut T) + 'static) -> Self {
        Self {
            description: description.into(),
            pre: None,
            run: Box::new(run),
            post: None,
            dispatch: None,
        }
    }

    /// Add an untimed transform applied to every input before the run stage
    pub fn with_pre(mut self, pre: impl Fn(T) -> T + 'static) -> Self {
        self.pre = Some(Box::new(pre));
        self
    }

    /// Add an untimed check applied to every value after the run stage.
    ///
    /// Only the measured pass calls it; warmup skips verification.
    pub fn with_post(mut self, post: impl Fn(&T) + 'static) -> Self {
        self.post = Some(Box::new(post));
        self
    }

    /// Route this runner's log events to `dispatch` instead of the default subscriber
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the benchmark `m` times and return the mean milliseconds per run.
    ///
    /// A warmup pass of [`warmup_runs`]`(m)` repetitions runs first and its
    /// result is discarded. With `m == 0` the warmup still runs, then the
    /// measured pass fails with [`TimerError::ZeroRepetitions`].
    pub fn run<S>(&self, supplier: S, m: usize) -> Result<f64, TimerError>
    where
        S: FnMut() -> T,
    {
        match &self.dispatch {
            Some(dispatch) => {
                tracing::dispatcher::with_default(dispatch, || self.run_passes(supplier, m))
            }
            None => self.run_passes(supplier, m),
        }
    }

    /// Run the benchmark on clones of a single input value
    pub fn run_with_input(&self, input: T, m: usize) -> Result<f64, TimerError>
    where
        T: Clone,
    {
        self.run(|| input.clone(), m)
    }

    fn run_passes<S>(&self, mut supplier: S, m: usize) -> Result<f64, TimerError>
    where
        S: FnMut() -> T,
    {
        let span = tracing::info_span!("benchmark", description = %self.description);
        let _enter = span.enter();

        tracing::info!(
            "Begin run: {} with {} runs",
            self.description,
            format_whole(m)
        );

        let warmup = warmup_runs(m);
        let warmup_mean = self.pass(warmup, &mut supplier, false)?;
        tracing::debug!(runs = warmup, mean_ms = warmup_mean, "warmup complete");

        self.pass(m, &mut supplier, true)
    }

    /// One timed pass on a fresh timer
    fn pass<S>(&self, n: usize, supplier: &mut S, verify: bool) -> Result<f64, TimerError>
    where
        S: FnMut() -> T,
    {
        let run = &self.run;
        let step = |mut input: T| {
            run(&mut input);
            input
        };

        let mut pre = self.pre.as_deref();
        let mut post = self
            .post
            .as_deref()
            .filter(|_| verify)
            .map(|post| move |output: T| post(&output));

        Timer::new().repeat(
            n,
            supplier,
            step,
            pre.as_mut().map(|pre| pre as &mut dyn FnMut(T) -> T),
            post.as_mut().map(|post| post as &mut dyn FnMut(T)),
        )
    }
}

impl<T> std::fmt::Debug for BenchmarkRunner<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkRunner")
            .field("description", &self.description)
            .field("pre", &self.pre.is_some())
            .field("post", &self.post.is_some())
            .field("dispatch", &self.dispatch.is_some())
            .finish()
    }
}
