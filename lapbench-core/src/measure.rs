//! Pausable Lap Timing
//!
//! A monotonic stopwatch that accumulates elapsed time only while running.
//! Every pause closes one lap, so the mean lap is the timed total divided by
//! the number of pauses. Work done while the clock is paused (input
//! generation, setup, verification) never reaches the total.

use std::time::{Duration, Instant};
use thiserror::Error;

/// Nanoseconds per millisecond
const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Timer usage errors.
///
/// These are programming errors in the caller: the harness never retries or
/// substitutes a default when one occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// `start` was called while the clock was already running
    #[error("Timer is already running")]
    AlreadyRunning,

    /// `pause` or `resume` was called while the clock was idle
    #[error("Timer is not running")]
    NotRunning,

    /// A mean was requested before any lap completed
    #[error("No completed laps: cannot compute a mean")]
    NoLaps,

    /// `repeat` was asked for zero repetitions
    #[error("Repetition count must be at least 1")]
    ZeroRepetitions,
}

/// Stopwatch with lap accounting.
///
/// States are Idle (`started == None`) and Running. A fresh timer is Idle.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    elapsed_nanos: u64,
    laps: u64,
    started: Option<Instant>,
}

impl Timer {
    /// Create an idle timer with no accumulated time
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock
    #[inline(always)]
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.started.is_some() {
            return Err(TimerError::AlreadyRunning);
        }
        self.started = Some(Instant::now());
        Ok(())
    }

    /// Pause the clock, closing one lap
    #[inline(always)]
    pub fn pause(&mut self) -> Result<(), TimerError> {
        let started = self.started.take().ok_or(TimerError::NotRunning)?;
        self.close_lap(started);
        Ok(())
    }

    #[inline(always)]
    fn close_lap(&mut self, started: Instant) {
        let nanos = started.elapsed().as_nanos() as u64;
        self.elapsed_nanos = self.elapsed_nanos.saturating_add(nanos);
        self.laps += 1;
    }

    /// Close the current lap and keep the clock running
    pub fn resume(&mut self) -> Result<(), TimerError> {
        self.pause()?;
        self.start()
    }

    /// Pause if running and return the accumulated nanoseconds.
    ///
    /// Stopping an idle timer is a no-op, so `stop` can always end a session.
    pub fn stop(&mut self) -> u64 {
        if let Some(started) = self.started.take() {
            self.close_lap(started);
        }
        self.elapsed_nanos
    }

    /// Mean lap time in milliseconds
    pub fn mean_lap(&self) -> Result<f64, TimerError> {
        if self.laps == 0 {
            return Err(TimerError::NoLaps);
        }
        Ok(self.elapsed_nanos as f64 / NANOS_PER_MILLI / self.laps as f64)
    }

    /// Number of completed laps
    pub fn laps(&self) -> u64 {
        self.laps
    }

    /// Accumulated nanoseconds from completed laps
    pub fn elapsed_nanos(&self) -> u64 {
        self.elapsed_nanos
    }

    /// Accumulated time from completed laps
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos)
    }

    /// Whether the clock is currently running
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Run `function` `n` times and return the mean time per run in milliseconds.
    ///
    /// Each iteration draws a fresh input from `supplier`, passes it through
    /// `pre` (if any), times `function` on it, then hands the result to `post`
    /// (if any). Only `function` runs with the clock going.
    ///
    /// # Arguments
    /// * `n` - Number of repetitions (must be at least 1)
    /// * `supplier` - Produces the input for each repetition
    /// * `function` - The operation being measured
    /// * `pre` - Optional untimed transform of each input
    /// * `post` - Optional untimed consumer of each result
    pub fn repeat<T, U, S, F>(
        &mut self,
        n: usize,
        mut supplier: S,
        mut function: F,
        mut pre: Option<&mut dyn FnMut(T) -> T>,
        mut post: Option<&mut dyn FnMut(U)>,
    ) -> Result<f64, TimerError>
    where
        S: FnMut() -> T,
        F: FnMut(T) -> U,
    {
        tracing::trace!(runs = n, "repeat: with {} runs", n);
        if n == 0 {
            return Err(TimerError::ZeroRepetitions);
        }

        for _ in 0..n {
            let mut input = supplier();
            if let Some(pre) = pre.as_deref_mut() {
                input = pre(input);
            }

            self.start()?;
            let output = std::hint::black_box(function(input));
            self.pause()?;

            if let Some(post) = post.as_deref_mut() {
                post(output);
            }
        }

        self.stop();
        self.mean_lap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn spin(duration: Duration) {
        let start = Instant::now();
        while start.elapsed() < duration {
            std::hint::spin_loop();
        }
    }

    #[test]
    fn test_new_timer_is_idle() {
        let timer = Timer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.laps(), 0);
        assert_eq!(timer.elapsed_nanos(), 0);
    }

    #[test]
    fn test_pause_without_start() {
        let mut timer = Timer::new();
        assert_eq!(timer.pause(), Err(TimerError::NotRunning));
        assert_eq!(timer.laps(), 0);
    }

    #[test]
    fn test_double_start() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        assert_eq!(timer.start(), Err(TimerError::AlreadyRunning));
        assert!(timer.is_running());
    }

    #[test]
    fn test_resume_requires_running() {
        let mut timer = Timer::new();
        assert_eq!(timer.resume(), Err(TimerError::NotRunning));
    }

    #[test]
    fn test_resume_closes_lap_and_keeps_running() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        timer.resume().unwrap();
        assert!(timer.is_running());
        assert_eq!(timer.laps(), 1);
        timer.pause().unwrap();
        assert_eq!(timer.laps(), 2);
    }

    #[test]
    fn test_pause_accumulates() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        std::thread::sleep(Duration::from_millis(10));
        timer.pause().unwrap();

        // Idle time is not counted
        std::thread::sleep(Duration::from_millis(20));

        timer.start().unwrap();
        std::thread::sleep(Duration::from_millis(10));
        let nanos = timer.stop();

        assert!(nanos >= 20_000_000);
        // Should be well under idle + running (accounting for scheduling)
        assert!(nanos < 40_000_000);
        assert_eq!(timer.laps(), 2);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_stop_closes_running_lap() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        std::thread::sleep(Duration::from_millis(5));
        let nanos = timer.stop();

        assert!(nanos >= 5_000_000);
        assert_eq!(timer.laps(), 1);
        assert!(!timer.is_running());

        // A second stop changes nothing
        assert_eq!(timer.stop(), nanos);
        assert_eq!(timer.laps(), 1);
    }

    #[test]
    fn test_stop_when_idle() {
        let mut timer = Timer::new();
        assert_eq!(timer.stop(), 0);
        assert_eq!(timer.laps(), 0);
    }

    #[test]
    fn test_mean_lap_without_laps() {
        let timer = Timer::new();
        assert_eq!(timer.mean_lap(), Err(TimerError::NoLaps));
    }

    #[test]
    fn test_mean_lap_is_milliseconds() {
        let timer = Timer {
            elapsed_nanos: 30_000_000,
            laps: 3,
            started: None,
        };
        assert!((timer.mean_lap().unwrap() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeat_zero_runs() {
        let supplied = Cell::new(0);
        let mut timer = Timer::new();
        let result = timer.repeat(
            0,
            || supplied.set(supplied.get() + 1),
            |_| (),
            None,
            None,
        );
        assert_eq!(result, Err(TimerError::ZeroRepetitions));
        assert_eq!(supplied.get(), 0);
    }

    #[test]
    fn test_repeat_call_counts() {
        let supplied = Cell::new(0usize);
        let ran = Cell::new(0usize);
        let mut timer = Timer::new();

        let mean = timer
            .repeat(
                7,
                || {
                    supplied.set(supplied.get() + 1);
                    supplied.get()
                },
                |x| {
                    ran.set(ran.get() + 1);
                    x * 2
                },
                None,
                None,
            )
            .unwrap();

        assert_eq!(supplied.get(), 7);
        assert_eq!(ran.get(), 7);
        assert_eq!(timer.laps(), 7);
        assert!(mean >= 0.0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_repeat_threads_pre_and_post() {
        let mut seen = Vec::new();
        let mut pre = |x: u32| x + 100;
        let mut post = |y: u32| seen.push(y);
        let mut next = 0u32;

        let mut timer = Timer::new();
        timer
            .repeat(
                3,
                || {
                    next += 1;
                    next
                },
                |x| x * 10,
                Some(&mut pre),
                Some(&mut post),
            )
            .unwrap();

        assert_eq!(seen, vec![1010, 1020, 1030]);
    }

    #[test]
    fn test_repeat_excludes_pre_and_post() {
        let mut pre = |x: u8| {
            std::thread::sleep(Duration::from_millis(20));
            x
        };
        let mut post = |_: u8| std::thread::sleep(Duration::from_millis(20));

        let mut timer = Timer::new();
        let mean = timer
            .repeat(
                3,
                || 0u8,
                |x| {
                    spin(Duration::from_millis(5));
                    x
                },
                Some(&mut pre),
                Some(&mut post),
            )
            .unwrap();

        assert!(mean >= 4.5, "mean {mean} below timed work");
        // Closer to the timed work (5ms) than to work + setup (25ms)
        assert!(mean < 15.0, "mean {mean} includes untimed phases");
    }
}
