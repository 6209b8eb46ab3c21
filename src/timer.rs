//! Stopwatch and rest timer state machines.
//!
//! Both advance only through `tick`, one call per elapsed second. The periodic
//! callback driving them is a [`Ticker`], which aborts its task on drop, so
//! every owner that leaves the running state just drops its ticker.

use crate::models::{RestTimerView, StopwatchView};
use crate::progress::format_clock;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

pub const TICK: Duration = Duration::from_secs(1);
pub const DEFAULT_REST_SECONDS: u32 = 60;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_seconds: u64,
    running: bool,
}

impl Stopwatch {
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_seconds = 0;
    }

    /// Returns whether the stopwatch is still running.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
        self.running
    }

    pub fn view(&self) -> StopwatchView {
        StopwatchView {
            elapsed_seconds: self.elapsed_seconds,
            display: format_clock(self.elapsed_seconds),
            running: self.running,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestTick {
    Idle,
    Running,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestTimer {
    duration: u32,
    remaining: u32,
    running: bool,
    armed: bool,
    completed: bool,
}

impl Default for RestTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REST_SECONDS)
    }
}

impl RestTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration: duration.max(1),
            remaining: 0,
            running: false,
            armed: false,
            completed: false,
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Restarts the countdown from the full duration. No-op while running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.remaining = self.duration;
        self.running = true;
        self.armed = true;
        self.completed = false;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.armed = false;
        self.completed = false;
        self.remaining = 0;
    }

    /// Counts down one second. The tick that reaches zero also stops the timer.
    pub fn tick(&mut self) -> RestTick {
        if !self.running {
            return RestTick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            self.completed = true;
            RestTick::Completed
        } else {
            RestTick::Running
        }
    }

    pub fn view(&self) -> RestTimerView {
        RestTimerView {
            remaining_seconds: self.remaining,
            display: format!("Rest: {:02}:{:02}", self.remaining / 60, self.remaining % 60),
            running: self.running,
            completed: self.completed,
            start_enabled: !self.running,
            stop_enabled: self.running,
            reset_enabled: self.armed,
        }
    }
}

/// Periodic one-second task. Dropping the ticker cancels it.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Runs `on_tick` once per [`TICK`], first after one full period, until it
    /// resolves to `false` or the ticker is dropped.
    pub fn spawn<F, Fut>(mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK, TICK);
            loop {
                interval.tick().await;
                if !on_tick().await {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn rest_timer_completes_on_sixtieth_tick() {
        let mut rest = RestTimer::default();
        assert!(rest.start());
        assert_eq!(rest.remaining_seconds(), 60);
        assert!(rest.view().stop_enabled);
        assert!(!rest.view().start_enabled);

        for _ in 0..59 {
            assert_eq!(rest.tick(), RestTick::Running);
        }
        assert_eq!(rest.tick(), RestTick::Completed);

        let view = rest.view();
        assert!(!view.running);
        assert!(view.completed);
        assert!(!view.stop_enabled);
        assert!(view.start_enabled);
        assert!(view.reset_enabled);
        assert_eq!(view.display, "Rest: 00:00");
        assert_eq!(rest.tick(), RestTick::Idle);
    }

    #[test]
    fn rest_timer_controls_follow_transitions() {
        let mut rest = RestTimer::new(90);
        let idle = rest.view();
        assert!(idle.start_enabled && !idle.stop_enabled && !idle.reset_enabled);

        rest.start();
        assert!(!rest.start());
        rest.tick();
        assert_eq!(rest.view().display, "Rest: 01:29");

        rest.stop();
        rest.stop();
        let stopped = rest.view();
        assert!(stopped.start_enabled && !stopped.stop_enabled && stopped.reset_enabled);
        assert_eq!(stopped.remaining_seconds, 89);

        rest.reset();
        assert_eq!(rest.view(), idle);
    }

    #[test]
    fn stopwatch_counts_only_while_running() {
        let mut watch = Stopwatch::default();
        assert!(!watch.tick());
        assert!(watch.toggle());
        watch.tick();
        watch.tick();
        assert!(!watch.toggle());
        watch.tick();
        assert_eq!(watch.elapsed_seconds(), 2);
        assert_eq!(watch.view().display, "00:00:02");

        assert!(watch.toggle());
        watch.tick();
        watch.reset();
        assert!(!watch.is_running());
        assert_eq!(watch, Stopwatch::default());
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_stops_when_callback_declines() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let ticker = Ticker::spawn(move || {
            let seen = Arc::clone(&seen);
            async move { seen.fetch_add(1, Ordering::SeqCst) + 1 < 3 }
        });

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        drop(ticker);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_ticker_never_fires_again() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let ticker = Ticker::spawn(move || {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            }
        });

        time::sleep(Duration::from_millis(2500)).await;
        drop(ticker);
        let fired = count.load(Ordering::SeqCst);
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(fired, 2);
        assert_eq!(count.load(Ordering::SeqCst), fired);
    }
}
