//! The runner lifecycle state machine
//!
//! A [`Runner`] exclusively owns one [`Runnable`] and gates its lifecycle:
//! setup happens exactly once (explicitly, or implicitly on the first
//! draw), teardown happens exactly once (explicitly, or on drop), and once
//! torn down the runner is inert - every subsequent call is a guarded
//! no-op rather than a fault, because re-entering destroyed user state
//! after teardown cannot be made safe by this code.

use std::sync::atomic::{AtomicBool, Ordering};

use fresco_platform::{
    AppEvent, GestureKind, InputEvent, KeyKind, MotionKind, MouseKind, TouchKind,
};

use crate::runnable::Runnable;

/// Owns a [`Runnable`] and mediates its lifecycle and input events
///
/// States: constructed-not-set-up → set-up → torn-down. The set-up
/// transition uses an atomic exchange so setup logic runs exactly once
/// even when a display-refresh driver races an explicit setup call from
/// another path; everything else assumes the single-threaded event loop
/// the platform layer provides.
pub struct Runner {
    runnable: Option<Box<dyn Runnable>>,
    set_up: AtomicBool,
}

impl Runner {
    /// Create a runner holding a not-yet-set-up runnable
    pub fn new(runnable: Box<dyn Runnable>) -> Self {
        Self {
            runnable: Some(runnable),
            set_up: AtomicBool::new(false),
        }
    }

    /// Whether teardown has not happened yet
    pub fn is_live(&self) -> bool {
        self.runnable.is_some()
    }

    /// Whether setup has run
    pub fn is_set_up(&self) -> bool {
        self.set_up.load(Ordering::Acquire)
    }

    /// Run setup, unless it already ran
    pub fn setup(&mut self, event: &AppEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            if !self.set_up.swap(true, Ordering::AcqRel) {
                tracing::debug!("runner setup");
                runnable.setup(event);
            }
        }
    }

    /// Run one update tick
    ///
    /// A no-op before setup, so update logic never observes pre-setup
    /// state.
    pub fn update(&mut self, event: &AppEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            if self.set_up.load(Ordering::Acquire) {
                runnable.update(event);
            }
        }
    }

    /// Run one frame
    ///
    /// The first draw performs setup and one update before the
    /// pre → draw → post sequence, so the runnable's state is consistent
    /// before the first frame is rendered. Subsequent draws run only
    /// pre → draw → post.
    pub fn draw(&mut self, event: &AppEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            if !self.set_up.swap(true, Ordering::AcqRel) {
                tracing::debug!("runner setup (implicit, on first draw)");
                runnable.setup(event);
                runnable.update(event);
            }
            runnable.pre(event);
            runnable.draw(event);
            runnable.post(event);
        }
    }

    /// Tear down: run the runnable's exit hook, then release it
    ///
    /// The exit hook runs against the still-live runnable; afterwards the
    /// runner is inert and every call becomes a no-op. Idempotent.
    pub fn exit(&mut self, event: &AppEvent) {
        if let Some(mut runnable) = self.runnable.take() {
            tracing::debug!("runner exit");
            runnable.exit(event);
        }
    }

    /// Forward a multiplexed input event to the matching entry point
    ///
    /// Convenience for event-loop glue: routes on the holder tag and the
    /// payload kind. Events whose kind is `Undefined` are silently
    /// dropped.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Mouse(mouse) => match mouse.kind {
                MouseKind::Down => self.mouse_down(event),
                MouseKind::Drag => self.mouse_drag(event),
                MouseKind::Up => self.mouse_up(event),
                MouseKind::Move => self.mouse_move(event),
                MouseKind::Enter => self.mouse_enter(event),
                MouseKind::Exit => self.mouse_exit(event),
                MouseKind::Wheel => self.mouse_wheel(event),
                MouseKind::Undefined => {
                    tracing::trace!("dropping undefined mouse event");
                }
            },
            InputEvent::Key(key) => match key.kind {
                KeyKind::Down => self.key_down(event),
                KeyKind::Up => self.key_up(event),
                KeyKind::Undefined => {
                    tracing::trace!("dropping undefined key event");
                }
            },
            InputEvent::Touch(touch) => match touch.kind {
                TouchKind::Begin => self.touches_begin(event),
                TouchKind::Move => self.touches_move(event),
                TouchKind::End => self.touches_end(event),
                TouchKind::Cancel => self.touches_cancel(event),
                TouchKind::Undefined => {
                    tracing::trace!("dropping undefined touch event");
                }
            },
            InputEvent::Gesture(gesture) => match gesture.kind {
                GestureKind::Begin => self.gesture_begin(event),
                GestureKind::Change => self.gesture_change(event),
                GestureKind::Cancel => self.gesture_cancel(event),
                GestureKind::End => self.gesture_end(event),
                GestureKind::Undefined => {
                    tracing::trace!("dropping undefined gesture event");
                }
            },
            InputEvent::Motion(motion) => match motion.kind {
                MotionKind::Begin => self.motion_begin(event),
                MotionKind::Cancel => self.motion_cancel(event),
                MotionKind::End => self.motion_end(event),
                MotionKind::Undefined => {
                    tracing::trace!("dropping undefined motion event");
                }
            },
        }
    }

    // Input entry points forward to the runnable guarded only by liveness,
    // not by the set-up flag: input may arrive, and is forwarded, before
    // the first draw.

    pub fn mouse_down(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.mouse_down(event.mouse());
        }
    }

    pub fn mouse_drag(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.mouse_drag(event.mouse());
        }
    }

    pub fn mouse_up(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.mouse_up(event.mouse());
        }
    }

    pub fn mouse_move(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.mouse_move(event.mouse());
        }
    }

    pub fn mouse_enter(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.mouse_enter(event.mouse());
        }
    }

    pub fn mouse_exit(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.mouse_exit(event.mouse());
        }
    }

    pub fn mouse_wheel(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.mouse_wheel(event.mouse());
        }
    }

    pub fn key_down(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.key_down(event.key());
        }
    }

    pub fn key_up(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.key_up(event.key());
        }
    }

    pub fn touches_begin(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.touches_begin(event.touch());
        }
    }

    pub fn touches_move(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.touches_move(event.touch());
        }
    }

    pub fn touches_end(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.touches_end(event.touch());
        }
    }

    pub fn touches_cancel(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.touches_cancel(event.touch());
        }
    }

    pub fn gesture_begin(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.gesture_begin(event.gesture());
        }
    }

    pub fn gesture_change(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.gesture_change(event.gesture());
        }
    }

    pub fn gesture_cancel(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.gesture_cancel(event.gesture());
        }
    }

    pub fn gesture_end(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.gesture_end(event.gesture());
        }
    }

    pub fn motion_begin(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.motion_begin(event.motion());
        }
    }

    pub fn motion_cancel(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.motion_cancel(event.motion());
        }
    }

    pub fn motion_end(&mut self, event: &InputEvent) {
        if let Some(runnable) = self.runnable.as_mut() {
            runnable.motion_end(event.motion());
        }
    }
}

impl Drop for Runner {
    /// Implicit teardown with an empty event, unless exit already ran
    fn drop(&mut self) {
        self.exit(&AppEvent::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_core::Point;
    use fresco_platform::{Key, KeyEvent, Modifiers, MouseButton, MouseEvent};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CallLog(Arc<Mutex<Vec<&'static str>>>);

    impl CallLog {
        fn push(&self, call: &'static str) {
            self.0.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.0.lock().unwrap().clone()
        }
    }

    struct Recording {
        log: CallLog,
    }

    impl Runnable for Recording {
        fn setup(&mut self, _event: &AppEvent) {
            self.log.push("setup");
        }

        fn update(&mut self, _event: &AppEvent) {
            self.log.push("update");
        }

        fn pre(&mut self, _event: &AppEvent) {
            self.log.push("pre");
        }

        fn draw(&mut self, _event: &AppEvent) {
            self.log.push("draw");
        }

        fn post(&mut self, _event: &AppEvent) {
            self.log.push("post");
        }

        fn exit(&mut self, _event: &AppEvent) {
            self.log.push("exit");
        }

        fn mouse_down(&mut self, _event: &MouseEvent) {
            self.log.push("mouse_down");
        }

        fn key_down(&mut self, _event: &KeyEvent) {
            self.log.push("key_down");
        }
    }

    fn recording_runner() -> (Runner, CallLog) {
        let log = CallLog::default();
        let runner = Runner::new(Box::new(Recording { log: log.clone() }));
        (runner, log)
    }

    #[test]
    fn test_first_draw_sets_up_once() {
        let (mut runner, log) = recording_runner();
        let event = AppEvent::default();

        runner.draw(&event);
        runner.draw(&event);

        assert_eq!(
            log.calls(),
            vec!["setup", "update", "pre", "draw", "post", "pre", "draw", "post"]
        );
    }

    #[test]
    fn test_explicit_setup_is_not_repeated_by_draw() {
        let (mut runner, log) = recording_runner();
        let event = AppEvent::default();

        runner.setup(&event);
        runner.setup(&event);
        runner.draw(&event);

        assert_eq!(log.calls(), vec!["setup", "pre", "draw", "post"]);
    }

    #[test]
    fn test_update_before_setup_is_noop() {
        let (mut runner, log) = recording_runner();
        let event = AppEvent::default();

        runner.update(&event);
        assert!(log.calls().is_empty());

        runner.setup(&event);
        runner.update(&event);
        assert_eq!(log.calls(), vec!["setup", "update"]);
    }

    #[test]
    fn test_input_forwards_before_setup() {
        let (mut runner, log) = recording_runner();

        let down = InputEvent::from(MouseEvent::down(
            Point::ZERO,
            MouseButton::Left,
            Modifiers::default(),
        ));
        runner.handle_input(&down);

        assert_eq!(log.calls(), vec!["mouse_down"]);
        assert!(!runner.is_set_up());
    }

    #[test]
    fn test_exit_is_idempotent_and_terminal() {
        let (mut runner, log) = recording_runner();
        let event = AppEvent::default();

        runner.draw(&event);
        runner.exit(&event);
        runner.exit(&event);
        runner.draw(&event);
        runner.update(&event);
        runner.handle_input(&InputEvent::from(KeyEvent::down(Key::A, Modifiers::default())));

        let calls = log.calls();
        assert_eq!(calls.iter().filter(|c| **c == "exit").count(), 1);
        assert_eq!(calls.last(), Some(&"exit"));
        assert!(!runner.is_live());
    }

    #[test]
    fn test_drop_runs_exit_once() {
        let (runner, log) = recording_runner();
        drop(runner);
        assert_eq!(log.calls(), vec!["exit"]);
    }

    #[test]
    fn test_exit_then_drop_does_not_double_exit() {
        let (mut runner, log) = recording_runner();
        runner.exit(&AppEvent::default());
        drop(runner);
        assert_eq!(log.calls(), vec!["exit"]);
    }

    #[test]
    fn test_undefined_input_is_dropped() {
        let (mut runner, log) = recording_runner();
        runner.handle_input(&InputEvent::from(MouseEvent::default()));
        assert!(log.calls().is_empty());
    }
}
