//! The sketch programming model: queued input and per-frame snapshots
//!
//! A [`Sketch`] wraps user [`SketchHooks`] in a [`Runnable`] that buffers
//! asynchronous input until a deterministic point - the next draw - so the
//! snapshot accessors ([`SketchState::mouse`], [`SketchState::touch`], ...)
//! change exactly once per frame and in a well-defined order relative to
//! the user's `draw`.
//!
//! # Drain protocol
//!
//! On every draw, in order:
//!
//! 1. structural snapshot state (size, scale, context) updates from the
//!    [`AppEvent`],
//! 2. the previous-position trackers rotate (`pmouse ← dmouse`,
//!    `ptouch ← dtouch`),
//! 3. the user's `draw` hook runs against the current frame's snapshot,
//! 4. the frame-end trackers capture (`dmouse ← mouse`, `dtouch ← touch`),
//! 5. the queue drains FIFO: each buffered event mutates the snapshot and
//!    then invokes its user hook (`mouse_pressed`, `mouse_dragged`, ...).
//!
//! User code therefore observes the current frame's geometry during
//! `draw`, but input-derived state only advances after `draw` - a move
//! arriving between frames N and N+1 is first seen by `mouse_moved` after
//! frame N+1's draw body, and by `mouse()` inside `draw` from frame N+2.

use std::collections::VecDeque;
use std::time::Instant;

use fresco_core::{Point, Size, Vec2};
use fresco_platform::{
    AppEvent, ContextHolder, GestureEvent, GestureKind, InputEvent, InputKind, Key, KeyKind,
    Modifiers, MotionKind, MouseButton, MouseEvent, MouseKind, TouchEvent, TouchKind, TouchPoint,
};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::layer::{LayerId, LayerTree};
use crate::runnable::Runnable;

/// Sketch configuration
#[derive(Clone, Debug)]
pub struct SketchConfig {
    /// Window/view title
    pub title: String,
    /// Initial width in logical pixels
    pub width: f32,
    /// Initial height in logical pixels
    pub height: f32,
    /// Initial display scale factor
    pub scale: f64,
    /// Target frame rate, advisory for the platform driver
    pub frame_rate: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "Fresco Sketch".to_string(),
            width: 800.0,
            height: 600.0,
            scale: 1.0,
            frame_rate: 60.0,
        }
    }
}

impl SketchConfig {
    /// Create a configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the initial size
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the target frame rate
    pub fn frame_rate(mut self, frame_rate: f32) -> Self {
        self.frame_rate = frame_rate;
        self
    }
}

/// Per-frame snapshot state handed to every [`SketchHooks`] method
///
/// Input-derived fields advance only while the queue drains, after the
/// frame's `draw` hook. The previous-position pair (`pmouse`, `ptouch`)
/// holds end-of-previous-frame values; the event-chain pair (`emouse`,
/// `etouch`) holds the position as of the previously dispatched drag/move
/// event, giving drag handlers a continuous chain across multiple
/// same-frame events.
pub struct SketchState {
    context: ContextHolder,
    size: Size,
    scale: f64,
    frame_count: u64,

    mouse: Point,
    pmouse: Point,
    dmouse: Point,
    emouse: Point,
    mouse_pressed: bool,
    mouse_over: bool,
    mouse_button: MouseButton,
    wheel: Vec2,

    touch: Point,
    ptouch: Point,
    dtouch: Point,
    etouch: Point,
    touch_pressed: bool,
    touches: FxHashMap<u64, TouchPoint>,

    key: Key,
    key_pressed: bool,
    keys_down: FxHashSet<Key>,
    modifiers: Modifiers,

    layers: LayerTree,
}

impl SketchState {
    fn new(size: Size, scale: f64) -> Self {
        Self {
            context: ContextHolder::empty(),
            size,
            scale,
            frame_count: 0,
            mouse: Point::ZERO,
            pmouse: Point::ZERO,
            dmouse: Point::ZERO,
            emouse: Point::ZERO,
            mouse_pressed: false,
            mouse_over: false,
            mouse_button: MouseButton::Left,
            wheel: Vec2::ZERO,
            touch: Point::ZERO,
            ptouch: Point::ZERO,
            dtouch: Point::ZERO,
            etouch: Point::ZERO,
            touch_pressed: false,
            touches: FxHashMap::default(),
            key: Key::Unknown,
            key_pressed: false,
            keys_down: FxHashSet::default(),
            modifiers: Modifiers::default(),
            layers: LayerTree::new(size.to_rect()),
        }
    }

    /// The rendering context of the current callback
    ///
    /// Valid only for the duration of the callback that delivered it.
    pub fn context(&self) -> &ContextHolder {
        &self.context
    }

    /// View size in logical coordinates
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Display scale factor
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Frames drawn so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Mouse position as of the most recently dispatched event
    pub fn mouse(&self) -> Point {
        self.mouse
    }

    /// Mouse position at the start of the current frame
    pub fn pmouse(&self) -> Point {
        self.pmouse
    }

    /// Mouse position at the previously dispatched drag/move event
    pub fn emouse(&self) -> Point {
        self.emouse
    }

    pub fn is_mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the pointer is inside the view
    pub fn is_mouse_over(&self) -> bool {
        self.mouse_over
    }

    /// Button of the most recent press
    pub fn mouse_button(&self) -> MouseButton {
        self.mouse_button
    }

    /// Scroll delta of the most recent wheel event
    pub fn wheel(&self) -> Vec2 {
        self.wheel
    }

    /// Primary touch position as of the most recently dispatched event
    pub fn touch(&self) -> Point {
        self.touch
    }

    /// Primary touch position at the start of the current frame
    pub fn ptouch(&self) -> Point {
        self.ptouch
    }

    /// Primary touch position at the previously dispatched touch event
    pub fn etouch(&self) -> Point {
        self.etouch
    }

    pub fn is_touch_down(&self) -> bool {
        self.touch_pressed
    }

    /// Live touches by identifier
    pub fn touches(&self) -> &FxHashMap<u64, TouchPoint> {
        &self.touches
    }

    /// Key of the most recent key event
    pub fn key(&self) -> Key {
        self.key
    }

    pub fn is_key_pressed(&self) -> bool {
        self.key_pressed
    }

    /// Whether a specific key is currently held
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Modifiers as of the most recent input event
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// The layer hierarchy rooted at this sketch's view
    pub fn layers(&self) -> &LayerTree {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerTree {
        &mut self.layers
    }

    /// The root layer
    pub fn root(&self) -> LayerId {
        self.layers.root()
    }

    fn apply_app_event(&mut self, event: &AppEvent) {
        self.context = event.context().clone();
        self.scale = event.scale();
        if event.size() != Size::ZERO {
            self.size = event.size();
            self.layers.set_root_size(event.size());
        }
    }
}

impl std::fmt::Debug for SketchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SketchState")
            .field("size", &self.size)
            .field("frame_count", &self.frame_count)
            .field("mouse", &self.mouse)
            .field("touches", &self.touches.len())
            .finish()
    }
}

/// The user-facing behavior surface of a [`Sketch`]
///
/// Lifecycle hooks run in runner order; input hooks run while the queue
/// drains, after the same frame's `draw`, with the snapshot already
/// advanced to the event being dispatched. Every method defaults to a
/// no-op.
#[allow(unused_variables)]
pub trait SketchHooks {
    fn setup(&mut self, state: &mut SketchState) {}
    fn update(&mut self, state: &mut SketchState) {}
    fn draw(&mut self, state: &mut SketchState) {}
    fn exit(&mut self, state: &mut SketchState) {}

    fn mouse_pressed(&mut self, state: &mut SketchState) {}
    fn mouse_dragged(&mut self, state: &mut SketchState) {}
    fn mouse_released(&mut self, state: &mut SketchState) {}
    fn mouse_moved(&mut self, state: &mut SketchState) {}
    fn mouse_entered(&mut self, state: &mut SketchState) {}
    fn mouse_exited(&mut self, state: &mut SketchState) {}
    fn mouse_wheel(&mut self, state: &mut SketchState) {}

    fn key_pressed(&mut self, state: &mut SketchState) {}
    fn key_released(&mut self, state: &mut SketchState) {}

    fn touches_began(&mut self, state: &mut SketchState) {}
    fn touches_moved(&mut self, state: &mut SketchState) {}
    fn touches_ended(&mut self, state: &mut SketchState) {}
    fn touches_cancelled(&mut self, state: &mut SketchState) {}

    fn gesture_began(&mut self, state: &mut SketchState, event: &GestureEvent) {}
    fn gesture_changed(&mut self, state: &mut SketchState, event: &GestureEvent) {}
    fn gesture_cancelled(&mut self, state: &mut SketchState, event: &GestureEvent) {}
    fn gesture_ended(&mut self, state: &mut SketchState, event: &GestureEvent) {}

    fn motion_began(&mut self, state: &mut SketchState) {}
    fn motion_cancelled(&mut self, state: &mut SketchState) {}
    fn motion_ended(&mut self, state: &mut SketchState) {}
}

/// A [`Runnable`] that queues input and maintains per-frame snapshots
///
/// Owns the user's hooks, the snapshot state, and the FIFO event queue.
/// Hand it to a [`Runner`](crate::Runner) to drive.
pub struct Sketch<H: SketchHooks> {
    hooks: H,
    state: SketchState,
    queue: VecDeque<InputEvent>,
    config: SketchConfig,
    last_tick: Option<Instant>,
}

impl<H: SketchHooks> Sketch<H> {
    pub fn new(hooks: H) -> Self {
        Self::with_config(hooks, SketchConfig::default())
    }

    pub fn with_config(hooks: H, config: SketchConfig) -> Self {
        let state = SketchState::new(Size::new(config.width, config.height), config.scale);
        Self {
            hooks,
            state,
            queue: VecDeque::new(),
            config,
            last_tick: None,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// The snapshot state, for inspection between callbacks
    pub fn state(&self) -> &SketchState {
        &self.state
    }

    /// Events buffered and not yet drained
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    fn enqueue(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    fn drain(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            match event.kind() {
                InputKind::Mouse => Self::handle_mouse_event(&mut self.hooks, &mut self.state, &event),
                InputKind::Key => Self::handle_key_event(&mut self.hooks, &mut self.state, &event),
                InputKind::Touch => Self::handle_touch_event(&mut self.hooks, &mut self.state, &event),
                InputKind::Gesture => {
                    Self::handle_gesture_event(&mut self.hooks, &mut self.state, &event)
                }
                InputKind::Motion => {
                    Self::handle_motion_event(&mut self.hooks, &mut self.state, &event)
                }
            }
        }
    }

    fn handle_mouse_event(hooks: &mut H, state: &mut SketchState, event: &InputEvent) {
        // Wrong-variant access panics: a mismatch here is a queueing bug.
        let mouse = *event.mouse();
        match mouse.kind {
            MouseKind::Down => {
                state.mouse = mouse.position;
                state.emouse = mouse.position;
                state.mouse_pressed = true;
                state.mouse_button = mouse.button;
                state.modifiers = mouse.modifiers;
                hooks.mouse_pressed(state);
            }
            MouseKind::Drag => {
                state.emouse = state.mouse;
                state.mouse = mouse.position;
                state.modifiers = mouse.modifiers;
                hooks.mouse_dragged(state);
            }
            MouseKind::Up => {
                state.emouse = state.mouse;
                state.mouse = mouse.position;
                state.mouse_pressed = false;
                state.modifiers = mouse.modifiers;
                hooks.mouse_released(state);
            }
            MouseKind::Move => {
                state.emouse = state.mouse;
                state.mouse = mouse.position;
                state.modifiers = mouse.modifiers;
                hooks.mouse_moved(state);
            }
            MouseKind::Enter => {
                state.mouse_over = true;
                hooks.mouse_entered(state);
            }
            MouseKind::Exit => {
                state.mouse_over = false;
                hooks.mouse_exited(state);
            }
            MouseKind::Wheel => {
                state.wheel = mouse.wheel;
                state.modifiers = mouse.modifiers;
                hooks.mouse_wheel(state);
            }
            MouseKind::Undefined => {
                tracing::trace!("ignoring undefined mouse event in drain");
            }
        }
    }

    fn handle_key_event(hooks: &mut H, state: &mut SketchState, event: &InputEvent) {
        let key = *event.key();
        match key.kind {
            KeyKind::Down => {
                state.key = key.key;
                state.modifiers = key.modifiers;
                state.keys_down.insert(key.key);
                state.key_pressed = true;
                hooks.key_pressed(state);
            }
            KeyKind::Up => {
                state.key = key.key;
                state.modifiers = key.modifiers;
                state.keys_down.remove(&key.key);
                state.key_pressed = !state.keys_down.is_empty();
                hooks.key_released(state);
            }
            KeyKind::Undefined => {
                tracing::trace!("ignoring undefined key event in drain");
            }
        }
    }

    fn handle_touch_event(hooks: &mut H, state: &mut SketchState, event: &InputEvent) {
        let touch = event.touch().clone();
        match touch.kind {
            TouchKind::Begin => {
                for point in &touch.touches {
                    state.touches.insert(point.id, *point);
                }
                if let Some(primary) = touch.primary() {
                    state.touch = primary.position;
                    state.etouch = primary.position;
                }
                state.touch_pressed = true;
                hooks.touches_began(state);
            }
            TouchKind::Move => {
                for point in &touch.touches {
                    state.touches.insert(point.id, *point);
                }
                if let Some(primary) = touch.primary() {
                    state.etouch = state.touch;
                    state.touch = primary.position;
                }
                hooks.touches_moved(state);
            }
            TouchKind::End => {
                for point in &touch.touches {
                    state.touches.remove(&point.id);
                }
                if let Some(primary) = touch.primary() {
                    state.etouch = state.touch;
                    state.touch = primary.position;
                }
                state.touch_pressed = !state.touches.is_empty();
                hooks.touches_ended(state);
            }
            TouchKind::Cancel => {
                for point in &touch.touches {
                    state.touches.remove(&point.id);
                }
                state.touch_pressed = !state.touches.is_empty();
                hooks.touches_cancelled(state);
            }
            TouchKind::Undefined => {
                tracing::trace!("ignoring undefined touch event in drain");
            }
        }
    }

    fn handle_gesture_event(hooks: &mut H, state: &mut SketchState, event: &InputEvent) {
        let gesture = event.gesture().clone();
        match gesture.kind {
            GestureKind::Begin => hooks.gesture_began(state, &gesture),
            GestureKind::Change => hooks.gesture_changed(state, &gesture),
            GestureKind::Cancel => hooks.gesture_cancelled(state, &gesture),
            GestureKind::End => hooks.gesture_ended(state, &gesture),
            GestureKind::Undefined => {
                tracing::trace!("ignoring undefined gesture event in drain");
            }
        }
    }

    fn handle_motion_event(hooks: &mut H, state: &mut SketchState, event: &InputEvent) {
        let motion = *event.motion();
        match motion.kind {
            MotionKind::Begin => hooks.motion_began(state),
            MotionKind::Cancel => hooks.motion_cancelled(state),
            MotionKind::End => hooks.motion_ended(state),
            MotionKind::Undefined => {
                tracing::trace!("ignoring undefined motion event in drain");
            }
        }
    }
}

impl<H: SketchHooks> Runnable for Sketch<H> {
    fn setup(&mut self, event: &AppEvent) {
        self.state.apply_app_event(event);
        self.hooks.setup(&mut self.state);
    }

    fn update(&mut self, event: &AppEvent) {
        self.state.apply_app_event(event);
        let now = Instant::now();
        let dt_ms = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f32() * 1000.0)
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.state.layers.tick_timelines(dt_ms);
        self.hooks.update(&mut self.state);
    }

    fn draw(&mut self, event: &AppEvent) {
        self.state.apply_app_event(event);
        self.state.pmouse = self.state.dmouse;
        self.state.ptouch = self.state.dtouch;
        self.hooks.draw(&mut self.state);
        self.state.dmouse = self.state.mouse;
        self.state.dtouch = self.state.touch;
        self.state.frame_count += 1;
        self.drain();
    }

    fn exit(&mut self, event: &AppEvent) {
        self.state.apply_app_event(event);
        self.hooks.exit(&mut self.state);
    }

    fn mouse_down(&mut self, event: &MouseEvent) {
        self.enqueue(InputEvent::Mouse(*event));
    }

    fn mouse_drag(&mut self, event: &MouseEvent) {
        self.enqueue(InputEvent::Mouse(*event));
    }

    fn mouse_up(&mut self, event: &MouseEvent) {
        self.enqueue(InputEvent::Mouse(*event));
    }

    fn mouse_move(&mut self, event: &MouseEvent) {
        self.enqueue(InputEvent::Mouse(*event));
    }

    fn mouse_enter(&mut self, event: &MouseEvent) {
        self.enqueue(InputEvent::Mouse(*event));
    }

    fn mouse_exit(&mut self, event: &MouseEvent) {
        self.enqueue(InputEvent::Mouse(*event));
    }

    fn mouse_wheel(&mut self, event: &MouseEvent) {
        self.enqueue(InputEvent::Mouse(*event));
    }

    fn key_down(&mut self, event: &fresco_platform::KeyEvent) {
        self.enqueue(InputEvent::Key(*event));
    }

    fn key_up(&mut self, event: &fresco_platform::KeyEvent) {
        self.enqueue(InputEvent::Key(*event));
    }

    fn touches_begin(&mut self, event: &TouchEvent) {
        self.enqueue(InputEvent::Touch(event.clone()));
    }

    fn touches_move(&mut self, event: &TouchEvent) {
        self.enqueue(InputEvent::Touch(event.clone()));
    }

    fn touches_end(&mut self, event: &TouchEvent) {
        self.enqueue(InputEvent::Touch(event.clone()));
    }

    fn touches_cancel(&mut self, event: &TouchEvent) {
        self.enqueue(InputEvent::Touch(event.clone()));
    }

    fn gesture_begin(&mut self, event: &GestureEvent) {
        self.enqueue(InputEvent::Gesture(event.clone()));
    }

    fn gesture_change(&mut self, event: &GestureEvent) {
        self.enqueue(InputEvent::Gesture(event.clone()));
    }

    fn gesture_cancel(&mut self, event: &GestureEvent) {
        self.enqueue(InputEvent::Gesture(event.clone()));
    }

    fn gesture_end(&mut self, event: &GestureEvent) {
        self.enqueue(InputEvent::Gesture(event.clone()));
    }

    fn motion_begin(&mut self, event: &fresco_platform::MotionEvent) {
        self.enqueue(InputEvent::Motion(*event));
    }

    fn motion_cancel(&mut self, event: &fresco_platform::MotionEvent) {
        self.enqueue(InputEvent::Motion(*event));
    }

    fn motion_end(&mut self, event: &fresco_platform::MotionEvent) {
        self.enqueue(InputEvent::Motion(*event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_platform::KeyEvent;
    use smallvec::smallvec;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Trace(Arc<Mutex<Vec<String>>>);

    impl Trace {
        fn push(&self, entry: impl Into<String>) {
            self.0.lock().unwrap().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct Probe {
        trace: Trace,
    }

    impl SketchHooks for Probe {
        fn draw(&mut self, state: &mut SketchState) {
            self.trace.push(format!(
                "draw m=({},{}) p=({},{})",
                state.mouse().x,
                state.mouse().y,
                state.pmouse().x,
                state.pmouse().y
            ));
        }

        fn mouse_pressed(&mut self, state: &mut SketchState) {
            self.trace
                .push(format!("pressed ({},{})", state.mouse().x, state.mouse().y));
        }

        fn mouse_dragged(&mut self, state: &mut SketchState) {
            self.trace.push(format!(
                "dragged e=({},{}) m=({},{})",
                state.emouse().x,
                state.emouse().y,
                state.mouse().x,
                state.mouse().y
            ));
        }

        fn mouse_released(&mut self, state: &mut SketchState) {
            self.trace
                .push(format!("released ({},{})", state.mouse().x, state.mouse().y));
        }

        fn mouse_moved(&mut self, state: &mut SketchState) {
            self.trace
                .push(format!("moved ({},{})", state.mouse().x, state.mouse().y));
        }

        fn key_pressed(&mut self, state: &mut SketchState) {
            self.trace.push(format!("key {:?}", state.key()));
        }
    }

    fn probe_sketch() -> (Sketch<Probe>, Trace) {
        let trace = Trace::default();
        let sketch = Sketch::new(Probe {
            trace: trace.clone(),
        });
        (sketch, trace)
    }

    fn frame_event() -> AppEvent {
        AppEvent::new(ContextHolder::empty(), Size::new(800.0, 600.0), 1.0)
    }

    #[test]
    fn test_queue_is_fifo_and_drains_after_draw() {
        let (mut sketch, trace) = probe_sketch();
        let mods = Modifiers::default();

        sketch.mouse_down(&MouseEvent::down(Point::new(1.0, 1.0), MouseButton::Left, mods));
        sketch.key_down(&KeyEvent::down(Key::A, mods));
        sketch.mouse_up(&MouseEvent::up(Point::new(2.0, 2.0), MouseButton::Left, mods));
        assert_eq!(sketch.pending_events(), 3);

        sketch.draw(&frame_event());

        assert_eq!(sketch.pending_events(), 0);
        assert_eq!(
            trace.entries(),
            vec![
                "draw m=(0,0) p=(0,0)",
                "pressed (1,1)",
                "key A",
                "released (2,2)",
            ]
        );
    }

    #[test]
    fn test_snapshot_rotation_across_frames() {
        let (mut sketch, trace) = probe_sketch();
        let event = frame_event();

        // Frame 1: nothing queued
        sketch.draw(&event);
        // Move arrives between frames 1 and 2
        sketch.mouse_move(&MouseEvent::moved(Point::new(10.0, 20.0), Modifiers::default()));
        // Frame 2: draw body still sees the old position; the handler
        // runs after it with the new one
        sketch.draw(&event);
        // Frame 3: mouse() has advanced, pmouse() still lags one frame
        sketch.draw(&event);
        // Frame 4: pmouse() catches up
        sketch.draw(&event);

        assert_eq!(
            trace.entries(),
            vec![
                "draw m=(0,0) p=(0,0)",
                "draw m=(0,0) p=(0,0)",
                "moved (10,20)",
                "draw m=(10,20) p=(0,0)",
                "draw m=(10,20) p=(10,20)",
            ]
        );
    }

    #[test]
    fn test_same_frame_drags_chain_through_emouse() {
        let (mut sketch, trace) = probe_sketch();
        let mods = Modifiers::default();

        sketch.mouse_down(&MouseEvent::down(Point::new(0.0, 0.0), MouseButton::Left, mods));
        sketch.mouse_drag(&MouseEvent::drag(Point::new(5.0, 5.0), MouseButton::Left, mods));
        sketch.mouse_drag(&MouseEvent::drag(Point::new(9.0, 9.0), MouseButton::Left, mods));
        sketch.draw(&frame_event());

        assert_eq!(
            trace.entries(),
            vec![
                "draw m=(0,0) p=(0,0)",
                "pressed (0,0)",
                "dragged e=(0,0) m=(5,5)",
                "dragged e=(5,5) m=(9,9)",
            ]
        );
    }

    #[test]
    fn test_pressed_state_tracks_down_and_up() {
        let (mut sketch, _trace) = probe_sketch();
        let mods = Modifiers::default();

        sketch.mouse_down(&MouseEvent::down(Point::new(1.0, 1.0), MouseButton::Right, mods));
        sketch.draw(&frame_event());
        assert!(sketch.state().is_mouse_pressed());
        assert_eq!(sketch.state().mouse_button(), MouseButton::Right);

        sketch.mouse_up(&MouseEvent::up(Point::new(1.0, 1.0), MouseButton::Right, mods));
        sketch.draw(&frame_event());
        assert!(!sketch.state().is_mouse_pressed());
    }

    #[test]
    fn test_touch_lifecycle_updates_live_set() {
        let (mut sketch, _trace) = probe_sketch();

        let begin = TouchEvent::new(
            TouchKind::Begin,
            smallvec![
                TouchPoint::new(1, Point::new(10.0, 10.0)),
                TouchPoint::new(2, Point::new(50.0, 50.0)),
            ],
        );
        sketch.touches_begin(&begin);
        sketch.draw(&frame_event());
        assert!(sketch.state().is_touch_down());
        assert_eq!(sketch.state().touches().len(), 2);
        assert_eq!(sketch.state().touch(), Point::new(10.0, 10.0));

        let end = TouchEvent::new(
            TouchKind::End,
            smallvec![TouchPoint::new(1, Point::new(12.0, 12.0))],
        );
        sketch.touches_end(&end);
        sketch.draw(&frame_event());
        // One finger is still down
        assert!(sketch.state().is_touch_down());
        assert_eq!(sketch.state().touches().len(), 1);

        let end = TouchEvent::new(
            TouchKind::End,
            smallvec![TouchPoint::new(2, Point::new(50.0, 50.0))],
        );
        sketch.touches_end(&end);
        sketch.draw(&frame_event());
        assert!(!sketch.state().is_touch_down());
        assert!(sketch.state().touches().is_empty());
    }

    #[test]
    fn test_key_state_tracks_held_keys() {
        let (mut sketch, _trace) = probe_sketch();
        let mods = Modifiers::default();

        sketch.key_down(&KeyEvent::down(Key::A, mods));
        sketch.key_down(&KeyEvent::down(Key::B, mods));
        sketch.draw(&frame_event());
        assert!(sketch.state().is_key_pressed());
        assert!(sketch.state().is_key_down(Key::A));
        assert!(sketch.state().is_key_down(Key::B));

        sketch.key_up(&KeyEvent::up(Key::A, mods));
        sketch.draw(&frame_event());
        assert!(sketch.state().is_key_pressed());
        assert!(!sketch.state().is_key_down(Key::A));

        sketch.key_up(&KeyEvent::up(Key::B, mods));
        sketch.draw(&frame_event());
        assert!(!sketch.state().is_key_pressed());
    }

    #[test]
    fn test_undefined_event_is_ignored_in_drain() {
        let (mut sketch, trace) = probe_sketch();
        sketch.mouse_down(&MouseEvent::default());
        sketch.draw(&frame_event());
        assert_eq!(sketch.pending_events(), 0);
        assert_eq!(trace.entries(), vec!["draw m=(0,0) p=(0,0)"]);
    }

    #[test]
    fn test_draw_updates_view_geometry() {
        let (mut sketch, _trace) = probe_sketch();
        let event = AppEvent::new(ContextHolder::empty(), Size::new(1024.0, 768.0), 2.0);
        sketch.draw(&event);

        assert_eq!(sketch.state().width(), 1024.0);
        assert_eq!(sketch.state().height(), 768.0);
        assert_eq!(sketch.state().scale(), 2.0);
        assert_eq!(sketch.state().frame_count(), 1);

        let layers = sketch.state().layers();
        assert_eq!(layers.width(layers.root()), 1024.0);
    }

    #[test]
    fn test_context_is_replaced_each_callback() {
        struct FakeContext;

        let (mut sketch, _trace) = probe_sketch();
        let with_context = AppEvent::new(
            ContextHolder::new(Arc::new(FakeContext)),
            Size::new(800.0, 600.0),
            1.0,
        );
        sketch.setup(&with_context);
        assert!(sketch.state().context().get::<FakeContext>().is_some());

        sketch.draw(&frame_event());
        assert!(sketch.state().context().get::<FakeContext>().is_none());
    }
}
