// ticker.rs - Fixed-delay tick scheduling driven by an external clock

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// A tick should run now.
    Due,
    /// Nothing to do for this long.
    Wait(Duration),
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Stopped,
    Running { due: Instant },
}

/// Decides, from timestamps handed to it, when the next generation is due.
///
/// The delay is measured from the end of the previous tick, so a slow tick
/// pushes the following one back instead of causing a burst.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    state: State,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, state: State::Stopped }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts ticking; the first tick is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.state = State::Running { due: now };
    }

    pub fn stop(&mut self) {
        self.state = State::Stopped;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    pub fn poll(&self, now: Instant) -> Poll {
        match self.state {
            State::Stopped => Poll::Stopped,
            State::Running { due } if now >= due => Poll::Due,
            State::Running { due } => Poll::Wait(due - now),
        }
    }

    /// Arms the next tick one period after `now`.
    pub fn finished(&mut self, now: Instant) {
        if let State::Running { .. } = self.state {
            self.state = State::Running { due: now + self.period };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn stopped_until_started() {
        let ticker = Ticker::new(PERIOD);
        assert_eq!(ticker.poll(Instant::now()), Poll::Stopped);
        assert!(!ticker.is_running());
    }

    #[test]
    fn first_tick_is_immediate() {
        let now = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(now);
        assert_eq!(ticker.poll(now), Poll::Due);
    }

    #[test]
    fn waits_one_period_after_finishing() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(t0);

        // Tick took 30ms; the delay starts when it ends.
        let done = t0 + Duration::from_millis(30);
        ticker.finished(done);

        assert_eq!(ticker.poll(done), Poll::Wait(PERIOD));
        assert_eq!(ticker.poll(t0 + Duration::from_millis(100)), Poll::Wait(Duration::from_millis(30)));
        assert_eq!(ticker.poll(t0 + Duration::from_millis(130)), Poll::Due);
    }

    #[test]
    fn stays_due_until_finished() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(t0);

        assert_eq!(ticker.poll(t0 + Duration::from_secs(5)), Poll::Due);
        assert_eq!(ticker.poll(t0 + Duration::from_secs(6)), Poll::Due);
    }

    #[test]
    fn stop_halts_and_finished_does_not_restart() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.start(t0);
        ticker.stop();
        ticker.finished(t0);

        assert_eq!(ticker.poll(t0 + PERIOD), Poll::Stopped);
    }
}
