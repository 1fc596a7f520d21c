//! Integration tests driving a full runner + sketch session
//!
//! The in-file unit tests pin each piece in isolation; these exercise the
//! whole object graph the way a platform backend drives it: input methods
//! fire between frame ticks, frames run update + draw, teardown happens
//! once.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use fresco_animation::Tween;
use fresco_core::{Point, Size};
use fresco_platform::{
    AppEvent, ContextHolder, InputEvent, Key, KeyEvent, Modifiers, MouseButton, MouseEvent,
};

use crate::runner::Runner;
use crate::sketch::{Sketch, SketchHooks, SketchState};

#[derive(Clone, Default)]
struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct Session {
    journal: Journal,
}

impl SketchHooks for Session {
    fn setup(&mut self, state: &mut SketchState) {
        self.journal
            .push(format!("setup {}x{}", state.width(), state.height()));
    }

    fn update(&mut self, _state: &mut SketchState) {
        self.journal.push("update");
    }

    fn draw(&mut self, state: &mut SketchState) {
        self.journal.push(format!("draw #{}", state.frame_count()));
    }

    fn exit(&mut self, _state: &mut SketchState) {
        self.journal.push("exit");
    }

    fn mouse_pressed(&mut self, state: &mut SketchState) {
        self.journal
            .push(format!("pressed ({},{})", state.mouse().x, state.mouse().y));
    }

    fn mouse_released(&mut self, state: &mut SketchState) {
        self.journal.push("released");
    }

    fn key_pressed(&mut self, state: &mut SketchState) {
        self.journal.push(format!("key {:?}", state.key()));
    }
}

fn session_runner() -> (Runner, Journal) {
    let journal = Journal::default();
    let sketch = Sketch::new(Session {
        journal: journal.clone(),
    });
    (Runner::new(Box::new(sketch)), journal)
}

fn frame() -> AppEvent {
    AppEvent::new(ContextHolder::empty(), Size::new(640.0, 480.0), 1.0)
}

#[test]
fn test_full_session_order() {
    let (mut runner, journal) = session_runner();

    // Input arriving before the first frame is forwarded and queued
    runner.handle_input(&InputEvent::from(MouseEvent::down(
        Point::new(3.0, 7.0),
        MouseButton::Left,
        Modifiers::default(),
    )));

    // First frame: implicit setup + update, then the frame, then the
    // queued press drains after the draw body
    runner.draw(&frame());

    // Steady state: platform drives update + draw per tick
    runner.update(&frame());
    runner.draw(&frame());

    runner.exit(&AppEvent::default());

    // Torn down: everything below is a no-op
    runner.draw(&frame());
    runner.handle_input(&InputEvent::from(KeyEvent::down(Key::Q, Modifiers::default())));
    runner.exit(&AppEvent::default());

    assert_eq!(
        journal.entries(),
        vec![
            "setup 640x480",
            "update",
            "draw #0",
            "pressed (3,7)",
            "update",
            "draw #1",
            "exit",
        ]
    );
}

#[test]
fn test_input_between_frames_dispatches_in_order() {
    let (mut runner, journal) = session_runner();
    runner.draw(&frame());

    let mods = Modifiers::default();
    runner.handle_input(&InputEvent::from(MouseEvent::down(
        Point::new(1.0, 1.0),
        MouseButton::Left,
        mods,
    )));
    runner.handle_input(&InputEvent::from(KeyEvent::down(Key::Space, mods)));
    runner.handle_input(&InputEvent::from(MouseEvent::up(
        Point::new(2.0, 2.0),
        MouseButton::Left,
        mods,
    )));

    runner.draw(&frame());

    let entries = journal.entries();
    let tail: Vec<&str> = entries[entries.len() - 4..]
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(tail, vec!["draw #1", "pressed (1,1)", "key Space", "released"]);
}

#[test]
fn test_drop_tears_down_sketch() {
    let (mut runner, journal) = session_runner();
    runner.draw(&frame());
    drop(runner);

    assert_eq!(journal.entries().last().map(String::as_str), Some("exit"));
    assert_eq!(
        journal
            .entries()
            .iter()
            .filter(|e| e.as_str() == "exit")
            .count(),
        1
    );
}

struct Fading {
    opacity: Arc<Mutex<f32>>,
}

impl SketchHooks for Fading {
    fn setup(&mut self, state: &mut SketchState) {
        let opacity = Arc::clone(&self.opacity);
        let root = state.root();
        state
            .layers_mut()
            .timeline_mut(root)
            .drive(Tween::new(1.0_f32, 0.0, 1.0), move |v| {
                *opacity.lock().unwrap() = v;
            });
    }
}

#[test]
fn test_timelines_advance_with_update_ticks() {
    let opacity = Arc::new(Mutex::new(1.0_f32));
    let sketch = Sketch::new(Fading {
        opacity: Arc::clone(&opacity),
    });
    let mut runner = Runner::new(Box::new(sketch));

    runner.setup(&frame());
    runner.update(&frame());
    // A 1 ms tween is done after any real inter-frame delay
    std::thread::sleep(Duration::from_millis(15));
    runner.update(&frame());

    assert_eq!(*opacity.lock().unwrap(), 0.0);
}
