//! Timed tweens between two values
//!
//! A [`Tween`] interpolates from one value to another over a fixed
//! duration, shaped by an [`Easing`] preset. Tweens are advanced with
//! `tick(dt_ms)` - either by the owner directly from `update`, or by a
//! [`Timeline`](crate::Timeline) that owns them.

use crate::easing::Easing;
use crate::values::Interpolate;

/// A timed interpolation between two values
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    /// Duration in milliseconds
    duration_ms: f32,
    /// Delay before the first progress, in milliseconds
    delay_ms: f32,
    easing: Easing,
    /// Elapsed time since start (includes delay)
    elapsed_ms: f32,
    /// Whether the tween restarts after completing
    looping: bool,
    /// Whether each restart swaps direction
    yoyo: bool,
    playing: bool,
}

impl<T: Interpolate> Tween<T> {
    /// Create a tween from one value to another over a duration
    pub fn new(from: T, to: T, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            easing: Easing::Linear,
            elapsed_ms: 0.0,
            looping: false,
            yoyo: false,
            playing: true,
        }
    }

    /// Set the easing preset
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Delay the start by the given number of milliseconds
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Restart from the beginning after completing
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Swap direction on each loop iteration
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self.looping = self.looping || yoyo;
        self
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if !self.looping && self.elapsed_ms >= self.delay_ms + self.duration_ms {
            self.elapsed_ms = self.delay_ms + self.duration_ms;
            self.playing = false;
        }
    }

    /// Normalized progress through the current iteration (0.0 to 1.0, pre-easing)
    pub fn progress(&self) -> f32 {
        let active = (self.elapsed_ms - self.delay_ms).max(0.0);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        if !self.looping {
            return (active / self.duration_ms).min(1.0);
        }
        let cycle = active / self.duration_ms;
        let phase = cycle.fract();
        // Odd yoyo iterations run backwards
        if self.yoyo && (cycle as u32) % 2 == 1 {
            1.0 - phase
        } else {
            phase
        }
    }

    /// The current interpolated value
    pub fn value(&self) -> T {
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    /// Whether the tween is still advancing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a non-looping tween has reached its end
    pub fn is_finished(&self) -> bool {
        !self.looping && !self.playing
    }

    /// Pause without losing progress
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Resume a paused (but unfinished) tween
    pub fn resume(&mut self) {
        if self.looping || self.elapsed_ms < self.delay_ms + self.duration_ms {
            self.playing = true;
        }
    }

    /// Rewind to the start, replaying any delay
    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_completes() {
        let mut tween = Tween::new(0.0_f32, 10.0, 100.0);
        tween.tick(50.0);
        assert_eq!(tween.value(), 5.0);
        assert!(tween.is_playing());
        tween.tick(60.0);
        assert_eq!(tween.value(), 10.0);
        assert!(tween.is_finished());
        // Further ticks are inert
        tween.tick(100.0);
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut tween = Tween::new(0.0_f32, 10.0, 100.0).delay(50.0);
        tween.tick(40.0);
        assert_eq!(tween.value(), 0.0);
        tween.tick(60.0);
        assert_eq!(tween.value(), 5.0);
    }

    #[test]
    fn test_yoyo_reverses() {
        let mut tween = Tween::new(0.0_f32, 10.0, 100.0).yoyo(true);
        tween.tick(150.0);
        // Second iteration runs backwards: 50% through it is value 5,
        // heading down
        assert!((tween.value() - 5.0).abs() < 1e-4);
        tween.tick(40.0);
        assert!(tween.value() < 5.0);
        assert!(tween.is_playing());
    }

    #[test]
    fn test_pause_resume() {
        let mut tween = Tween::new(0.0_f32, 10.0, 100.0);
        tween.tick(30.0);
        tween.pause();
        tween.tick(1000.0);
        assert_eq!(tween.value(), 3.0);
        tween.resume();
        tween.tick(70.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let tween = Tween::new(0.0_f32, 10.0, 0.0);
        assert_eq!(tween.value(), 10.0);
    }
}
