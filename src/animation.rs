//! Frame-sequence player for sprite-sheet actors.
//!
//! Each visual state of an actor owns one [`Animation`]; the actor selects
//! exactly one as current and the rendering layer maps
//! [`Animation::current_frame`] onto a `TextureAtlas` index.  The player
//! itself knows nothing about textures — it is pure frame arithmetic, which
//! keeps it unit-testable without an app.

/// Plays `frame_count` frames at a fixed per-frame duration.
///
/// Looping animations wrap back to frame 0 and keep running; one-shots stop
/// on the last frame and report `is_running() == false` from then on.
#[derive(Debug, Clone)]
pub struct Animation {
    frame_count: usize,
    frame_duration_ms: f32,
    looping: bool,
    current_frame: usize,
    carry_ms: f32,
    running: bool,
}

impl Animation {
    /// A looping animation.  `frame_duration_ms` is clamped to ≥ 1 ms so the
    /// frame-advance division below can never hit zero.
    pub fn looping(frame_count: usize, frame_duration_ms: f32) -> Self {
        Self::build(frame_count, frame_duration_ms, true)
    }

    /// A one-shot animation: plays once and holds the last frame.
    pub fn one_shot(frame_count: usize, frame_duration_ms: f32) -> Self {
        Self::build(frame_count, frame_duration_ms, false)
    }

    fn build(frame_count: usize, frame_duration_ms: f32, looping: bool) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration_ms: frame_duration_ms.max(1.0),
            looping,
            current_frame: 0,
            carry_ms: 0.0,
            running: false,
        }
    }

    /// Reset to frame 0 and begin playing.
    pub fn start(&mut self) {
        self.current_frame = 0;
        self.carry_ms = 0.0;
        self.running = true;
    }

    /// Advance by `dt_ms` of elapsed time.
    ///
    /// A stalled frame may deliver several frame-durations at once; every
    /// whole duration advances one frame, so the animation stays in sync with
    /// timers running in parallel instead of stuttering one frame behind.
    pub fn update(&mut self, dt_ms: f32) {
        if !self.running {
            return;
        }
        self.carry_ms += dt_ms;
        let whole_frames = (self.carry_ms / self.frame_duration_ms) as usize;
        if whole_frames == 0 {
            return;
        }
        self.carry_ms -= whole_frames as f32 * self.frame_duration_ms;

        if self.looping {
            self.current_frame = (self.current_frame + whole_frames) % self.frame_count;
        } else if self.current_frame + whole_frames >= self.frame_count {
            self.current_frame = self.frame_count - 1;
            self.running = false;
        } else {
            self.current_frame += whole_frames;
        }
    }

    /// Whether the animation is still playing.  Looping animations run until
    /// the owner replaces them; one-shots stop after the last frame.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Index of the frame to display, always in `[0, frame_count)`.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Number of frames in the sheet.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looping_wraps_to_zero_after_full_cycle() {
        let mut a = Animation::looping(4, 100.0);
        a.start();
        for _ in 0..4 {
            a.update(100.0);
        }
        assert_eq!(a.current_frame(), 0);
        assert!(a.is_running());
    }

    #[test]
    fn one_shot_holds_last_frame_and_stops() {
        let mut a = Animation::one_shot(5, 100.0);
        a.start();
        for _ in 0..10 {
            a.update(100.0);
        }
        assert_eq!(a.current_frame(), 4);
        assert!(!a.is_running());
    }

    #[test]
    fn large_dt_advances_multiple_frames() {
        let mut a = Animation::looping(10, 100.0);
        a.start();
        a.update(350.0);
        assert_eq!(a.current_frame(), 3);
        // the 50 ms remainder carries into the next update
        a.update(50.0);
        assert_eq!(a.current_frame(), 4);
    }

    #[test]
    fn one_shot_finishes_even_under_one_huge_dt() {
        let mut a = Animation::one_shot(16, 100.0);
        a.start();
        a.update(10_000.0);
        assert_eq!(a.current_frame(), 15);
        assert!(!a.is_running());
    }

    #[test]
    fn stopped_animation_ignores_updates() {
        let mut a = Animation::one_shot(3, 100.0);
        a.start();
        a.update(1000.0);
        let held = a.current_frame();
        a.update(1000.0);
        assert_eq!(a.current_frame(), held);
    }

    #[test]
    fn restart_resets_to_frame_zero() {
        let mut a = Animation::one_shot(6, 100.0);
        a.start();
        a.update(600.0);
        assert!(!a.is_running());
        a.start();
        assert_eq!(a.current_frame(), 0);
        assert!(a.is_running());
    }

    #[test]
    fn zero_duration_is_clamped_not_divided() {
        let mut a = Animation::looping(4, 0.0);
        a.start();
        a.update(2.0);
        assert_eq!(a.current_frame(), 2);
    }
}
