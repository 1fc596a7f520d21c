//! The behavior contract a [`Runner`](crate::Runner) drives
//!
//! Implement [`Runnable`] directly for full access to the raw platform
//! events, or implement [`SketchHooks`](crate::SketchHooks) and wrap it in
//! a [`Sketch`](crate::Sketch) for the queued, snapshot-state programming
//! model. Exactly one of the two surfaces is expected to be meaningful per
//! application.

use fresco_platform::{AppEvent, GestureEvent, KeyEvent, MotionEvent, MouseEvent, TouchEvent};

/// Lifecycle and input entry points invoked by a `Runner`
///
/// The runner calls, in order: `setup` once, zero-or-more `update`, then
/// for each frame `pre` → `draw` → `post`, and exactly once at teardown
/// `exit`. Input entry points are invoked directly as events arrive - a
/// `Runnable` does not queue; queueing is layered on by
/// [`Sketch`](crate::Sketch).
///
/// Every method defaults to a no-op so implementations override only what
/// they need.
#[allow(unused_variables)]
pub trait Runnable {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Called exactly once before the first update/draw
    fn setup(&mut self, event: &AppEvent) {}

    /// Called once per tick between setup and draw
    fn update(&mut self, event: &AppEvent) {}

    /// Called immediately before `draw` each frame
    fn pre(&mut self, event: &AppEvent) {}

    /// Called once per frame
    fn draw(&mut self, event: &AppEvent) {}

    /// Called immediately after `draw` each frame
    fn post(&mut self, event: &AppEvent) {}

    /// Called exactly once at teardown, while the instance is still live
    fn exit(&mut self, event: &AppEvent) {}

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    fn mouse_down(&mut self, event: &MouseEvent) {}
    fn mouse_drag(&mut self, event: &MouseEvent) {}
    fn mouse_up(&mut self, event: &MouseEvent) {}
    fn mouse_move(&mut self, event: &MouseEvent) {}
    fn mouse_enter(&mut self, event: &MouseEvent) {}
    fn mouse_exit(&mut self, event: &MouseEvent) {}
    fn mouse_wheel(&mut self, event: &MouseEvent) {}

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    fn key_down(&mut self, event: &KeyEvent) {}
    fn key_up(&mut self, event: &KeyEvent) {}

    // ------------------------------------------------------------------
    // Touch
    // ------------------------------------------------------------------

    fn touches_begin(&mut self, event: &TouchEvent) {}
    fn touches_move(&mut self, event: &TouchEvent) {}
    fn touches_end(&mut self, event: &TouchEvent) {}
    fn touches_cancel(&mut self, event: &TouchEvent) {}

    // ------------------------------------------------------------------
    // Gesture
    // ------------------------------------------------------------------

    fn gesture_begin(&mut self, event: &GestureEvent) {}
    fn gesture_change(&mut self, event: &GestureEvent) {}
    fn gesture_cancel(&mut self, event: &GestureEvent) {}
    fn gesture_end(&mut self, event: &GestureEvent) {}

    // ------------------------------------------------------------------
    // Motion
    // ------------------------------------------------------------------

    fn motion_begin(&mut self, event: &MotionEvent) {}
    fn motion_cancel(&mut self, event: &MotionEvent) {}
    fn motion_end(&mut self, event: &MotionEvent) {}
}
