//! Countdown timer primitive.
//!
//! Every time-gated behaviour in the game — the boss attack cool-down, the
//! player's post-hit invincibility — runs on a [`TickTimer`].  The timer only
//! accumulates while running and is restarted explicitly by its owner; it is
//! never destroyed independently of the actor that holds it.

/// Counts elapsed milliseconds toward a fixed duration.
///
/// `is_done()` is a pure query: it reports `true` exactly when the
/// accumulated updates reach the duration, and keeps reporting `true` until
/// the owner calls [`TickTimer::restart`].
#[derive(Debug, Clone)]
pub struct TickTimer {
    duration_ms: f32,
    elapsed_ms: f32,
    running: bool,
}

impl TickTimer {
    /// A stopped timer for `duration_ms`.  Call [`TickTimer::start`] to arm it.
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Begin counting from wherever the timer currently stands.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Reset elapsed time to zero and resume counting.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
        self.running = true;
    }

    /// Accumulate `dt_ms` of elapsed time.  No-op while stopped.
    ///
    /// `dt_ms` must be non-negative (caller contract, not enforced).
    pub fn update(&mut self, dt_ms: f32) {
        if self.running {
            self.elapsed_ms += dt_ms;
        }
    }

    /// Whether the accumulated time has reached the duration.
    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_done_immediately_after_start() {
        let mut t = TickTimer::new(5000.0);
        t.start();
        assert!(!t.is_done());
    }

    #[test]
    fn done_exactly_at_duration() {
        let mut t = TickTimer::new(100.0);
        t.start();
        t.update(60.0);
        assert!(!t.is_done());
        t.update(40.0);
        assert!(t.is_done());
    }

    #[test]
    fn does_not_accumulate_while_stopped() {
        let mut t = TickTimer::new(50.0);
        t.update(1000.0);
        assert!(!t.is_done());
        t.start();
        t.update(50.0);
        assert!(t.is_done());
    }

    #[test]
    fn restart_clears_elapsed_and_resumes() {
        let mut t = TickTimer::new(100.0);
        t.start();
        t.update(150.0);
        assert!(t.is_done());
        t.restart();
        assert!(!t.is_done());
        t.update(100.0);
        assert!(t.is_done());
    }

    #[test]
    fn stays_done_until_restarted() {
        let mut t = TickTimer::new(10.0);
        t.start();
        t.update(10.0);
        t.update(10.0);
        assert!(t.is_done());
    }
}
