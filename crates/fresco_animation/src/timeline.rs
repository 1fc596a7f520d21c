//! Timeline orchestration
//!
//! A [`Timeline`] is a pausable clock that owns a set of running
//! animations and advances them together. Layers each reference a
//! timeline - their own, or by delegation the nearest ancestor's - so a
//! subtree's animations can be paused or scrubbed as a unit.

use slotmap::{new_key_type, SlotMap};

use crate::tween::Tween;
use crate::values::Interpolate;

new_key_type! {
    /// Handle to an animation registered on a timeline
    pub struct TweenId;
}

/// An animation a timeline can advance
///
/// Implemented by [`Tween`]; sketches can implement it for custom
/// animations that need timeline pausing.
pub trait Animate {
    /// Advance by `dt_ms` milliseconds
    fn tick(&mut self, dt_ms: f32);

    /// Whether the animation is still advancing
    fn is_playing(&self) -> bool;
}

impl<T: Interpolate> Animate for Tween<T> {
    fn tick(&mut self, dt_ms: f32) {
        Tween::tick(self, dt_ms);
    }

    fn is_playing(&self) -> bool {
        Tween::is_playing(self)
    }
}

/// A tween bound to an apply callback, driven by the timeline
struct Driven<T: Interpolate, F: FnMut(T)> {
    tween: Tween<T>,
    apply: F,
}

impl<T: Interpolate, F: FnMut(T)> Animate for Driven<T, F> {
    fn tick(&mut self, dt_ms: f32) {
        if !self.tween.is_playing() {
            return;
        }
        self.tween.tick(dt_ms);
        (self.apply)(self.tween.value());
    }

    fn is_playing(&self) -> bool {
        self.tween.is_playing()
    }
}

/// Pausable clock owning a set of running animations
pub struct Timeline {
    animations: SlotMap<TweenId, Box<dyn Animate + Send>>,
    now_ms: f32,
    playing: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            now_ms: 0.0,
            playing: true,
        }
    }

    /// Register an animation; it advances on every timeline tick
    pub fn add<A: Animate + Send + 'static>(&mut self, animation: A) -> TweenId {
        self.animations.insert(Box::new(animation))
    }

    /// Register a tween whose value is fed to `apply` on every tick
    pub fn drive<T, F>(&mut self, tween: Tween<T>, apply: F) -> TweenId
    where
        T: Interpolate + Send + 'static,
        F: FnMut(T) + Send + 'static,
    {
        self.add(Driven { tween, apply })
    }

    /// Remove an animation; returns whether it was present
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.animations.remove(id).is_some()
    }

    /// Advance the clock and every registered animation
    ///
    /// Paused timelines ignore ticks entirely - time does not accumulate.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.now_ms += dt_ms.max(0.0);
        for (_, animation) in self.animations.iter_mut() {
            animation.tick(dt_ms);
        }
    }

    /// Drop animations that have finished
    ///
    /// Finished animations are otherwise kept so they can be restarted;
    /// call this to reclaim slots in long-running sketches.
    pub fn prune(&mut self) {
        self.animations.retain(|_, animation| animation.is_playing());
    }

    /// Accumulated time in milliseconds
    pub fn now(&self) -> f32 {
        self.now_ms
    }

    /// Whether the clock advances on tick
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether any registered animation is still advancing
    pub fn has_active(&self) -> bool {
        self.animations.iter().any(|(_, a)| a.is_playing())
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("animations", &self.animations.len())
            .field("now_ms", &self.now_ms)
            .field("playing", &self.playing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_tick_accumulates() {
        let mut timeline = Timeline::new();
        timeline.tick(16.0);
        timeline.tick(16.0);
        assert_eq!(timeline.now(), 32.0);
    }

    #[test]
    fn test_pause_stops_clock_and_animations() {
        let mut timeline = Timeline::new();
        let id = timeline.add(Tween::new(0.0_f32, 1.0, 100.0));
        timeline.pause();
        timeline.tick(50.0);
        assert_eq!(timeline.now(), 0.0);
        assert!(timeline.has_active());
        timeline.resume();
        timeline.tick(150.0);
        assert!(!timeline.has_active());
        assert!(timeline.remove(id));
        assert!(!timeline.remove(id));
    }

    #[test]
    fn test_drive_applies_values() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut timeline = Timeline::new();
        timeline.drive(Tween::new(0.0_f32, 10.0, 100.0), move |v| {
            sink.lock().unwrap().push(v);
        });

        timeline.tick(50.0);
        timeline.tick(50.0);

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![5.0, 10.0]);
    }

    #[test]
    fn test_prune_drops_finished() {
        let mut timeline = Timeline::new();
        timeline.add(Tween::new(0.0_f32, 1.0, 100.0));
        timeline.add(Tween::new(0.0_f32, 1.0, 1000.0));
        timeline.tick(500.0);
        assert_eq!(timeline.len(), 2);
        timeline.prune();
        assert_eq!(timeline.len(), 1);
    }
}
