//! Input event types for mouse, keyboard, touch, gesture, and device motion
//!
//! Every concrete event type carries a kind enum whose `Undefined` variant is
//! the canonical empty sentinel: a default-constructed event is empty, and
//! `is_empty()` reports whether the kind is still `Undefined`. Events are
//! immutable records - construct them fully formed, never mutate them.
//!
//! [`InputEvent`] is the closed sum type that multiplexes the five concrete
//! event types through a single queue. Its typed accessors (`mouse()`,
//! `key()`, ...) panic on a tag mismatch: routing a queued event into the
//! wrong handler is a programming bug, not a runtime condition to recover
//! from.

use fresco_core::{Point, Vec2};
use smallvec::SmallVec;

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse event kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseKind {
    /// Empty sentinel for default-constructed events
    #[default]
    Undefined,
    /// Button pressed
    Down,
    /// Moved with a button held
    Drag,
    /// Button released
    Up,
    /// Moved with no button held
    Move,
    /// Pointer entered the view
    Enter,
    /// Pointer left the view
    Exit,
    /// Wheel or trackpad scroll
    Wheel,
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    #[default]
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Back button (side button)
    Back,
    /// Forward button (side button)
    Forward,
    /// Other button with index
    Other(u16),
}

/// Mouse event record
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseEvent {
    /// What happened
    pub kind: MouseKind,
    /// Position in window coordinates
    pub position: Point,
    /// Button involved (meaningful for Down/Drag/Up)
    pub button: MouseButton,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
    /// Scroll delta (meaningful for Wheel)
    pub wheel: Vec2,
}

impl MouseEvent {
    pub fn new(kind: MouseKind, position: Point, button: MouseButton, modifiers: Modifiers) -> Self {
        Self {
            kind,
            position,
            button,
            modifiers,
            wheel: Vec2::ZERO,
        }
    }

    /// Button-press event
    pub fn down(position: Point, button: MouseButton, modifiers: Modifiers) -> Self {
        Self::new(MouseKind::Down, position, button, modifiers)
    }

    /// Drag event (moved with a button held)
    pub fn drag(position: Point, button: MouseButton, modifiers: Modifiers) -> Self {
        Self::new(MouseKind::Drag, position, button, modifiers)
    }

    /// Button-release event
    pub fn up(position: Point, button: MouseButton, modifiers: Modifiers) -> Self {
        Self::new(MouseKind::Up, position, button, modifiers)
    }

    /// Move event (no button held)
    pub fn moved(position: Point, modifiers: Modifiers) -> Self {
        Self::new(MouseKind::Move, position, MouseButton::Left, modifiers)
    }

    /// Pointer entered the view
    pub fn enter(position: Point) -> Self {
        Self::new(MouseKind::Enter, position, MouseButton::Left, Modifiers::default())
    }

    /// Pointer left the view
    pub fn exit(position: Point) -> Self {
        Self::new(MouseKind::Exit, position, MouseButton::Left, Modifiers::default())
    }

    /// Wheel event with a scroll delta
    pub fn wheel(position: Point, delta: Vec2, modifiers: Modifiers) -> Self {
        Self {
            kind: MouseKind::Wheel,
            position,
            button: MouseButton::Left,
            modifiers,
            wheel: delta,
        }
    }

    /// Whether this is the default-constructed empty sentinel
    pub fn is_empty(&self) -> bool {
        self.kind == MouseKind::Undefined
    }
}

// ============================================================================
// Keyboard Events
// ============================================================================

/// Keyboard event kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Empty sentinel for default-constructed events
    #[default]
    Undefined,
    /// Key pressed
    Down,
    /// Key released
    Up,
}

/// Keyboard event record
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyEvent {
    /// Press or release
    pub kind: KeyKind,
    /// The key involved
    pub key: Key,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(kind: KeyKind, key: Key, modifiers: Modifiers) -> Self {
        Self {
            kind,
            key,
            modifiers,
        }
    }

    /// Key-press event
    pub fn down(key: Key, modifiers: Modifiers) -> Self {
        Self::new(KeyKind::Down, key, modifiers)
    }

    /// Key-release event
    pub fn up(key: Key, modifiers: Modifiers) -> Self {
        Self::new(KeyKind::Up, key, modifiers)
    }

    /// Whether this is the default-constructed empty sentinel
    pub fn is_empty(&self) -> bool {
        self.kind == KeyKind::Undefined
    }
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Check if only shift is held
    pub fn shift_only(&self) -> bool {
        self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Check if only ctrl is held
    pub fn ctrl_only(&self) -> bool {
        !self.shift && self.ctrl && !self.alt && !self.meta
    }

    /// Check if only alt is held
    pub fn alt_only(&self) -> bool {
        !self.shift && !self.ctrl && self.alt && !self.meta
    }

    /// Check if only meta is held
    pub fn meta_only(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && self.meta
    }
}

/// Key codes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Key {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Numbers
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Special keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    // Arrow keys
    Left,
    Right,
    Up,
    Down,

    // Modifier keys (for tracking state)
    Shift,
    Ctrl,
    Alt,
    Meta,

    // Character input (for text input)
    Char(char),

    // Unknown key
    #[default]
    Unknown,
}

// ============================================================================
// Touch Events
// ============================================================================

/// Touch event kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TouchKind {
    /// Empty sentinel for default-constructed events
    #[default]
    Undefined,
    /// Touches started
    Begin,
    /// Touches moved
    Move,
    /// Touches lifted
    End,
    /// Touches cancelled by the system
    Cancel,
}

/// A single touch point within a touch or gesture event
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    /// Unique identifier for this touch, stable across its begin/move/end
    pub id: u64,
    /// Position in window coordinates
    pub position: Point,
    /// Touch pressure (0.0 - 1.0, 0.0 when unsupported)
    pub pressure: f32,
}

impl TouchPoint {
    pub fn new(id: u64, position: Point) -> Self {
        Self {
            id,
            position,
            pressure: 0.0,
        }
    }
}

/// Touches rarely exceed two fingers; keep them inline
pub type TouchPoints = SmallVec<[TouchPoint; 2]>;

/// Touch event record carrying the set of touches that changed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    /// What happened to the touches
    pub kind: TouchKind,
    /// The touches that changed, in platform order
    pub touches: TouchPoints,
}

impl TouchEvent {
    pub fn new(kind: TouchKind, touches: TouchPoints) -> Self {
        Self { kind, touches }
    }

    /// The first touch in the set, if any
    pub fn primary(&self) -> Option<&TouchPoint> {
        self.touches.first()
    }

    /// Whether this is the default-constructed empty sentinel
    pub fn is_empty(&self) -> bool {
        self.kind == TouchKind::Undefined
    }
}

// ============================================================================
// Gesture Events
// ============================================================================

/// Gesture event kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Empty sentinel for default-constructed events
    #[default]
    Undefined,
    /// Gesture recognized and started
    Begin,
    /// Gesture parameters changed
    Change,
    /// Gesture cancelled by the system
    Cancel,
    /// Gesture finished
    End,
}

/// Gesture event record summarizing the touches it tracks
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureEvent {
    /// Gesture phase
    pub kind: GestureKind,
    /// The touches participating in the gesture
    pub touches: TouchPoints,
}

impl GestureEvent {
    pub fn new(kind: GestureKind, touches: TouchPoints) -> Self {
        Self { kind, touches }
    }

    /// Whether this is the default-constructed empty sentinel
    pub fn is_empty(&self) -> bool {
        self.kind == GestureKind::Undefined
    }
}

// ============================================================================
// Motion Events
// ============================================================================

/// Device motion event kind (shake and similar whole-device gestures)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionKind {
    /// Empty sentinel for default-constructed events
    #[default]
    Undefined,
    /// Motion started
    Begin,
    /// Motion cancelled by the system
    Cancel,
    /// Motion finished
    End,
}

/// Device motion event record
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionEvent {
    /// Motion phase
    pub kind: MotionKind,
}

impl MotionEvent {
    pub fn new(kind: MotionKind) -> Self {
        Self { kind }
    }

    /// Whether this is the default-constructed empty sentinel
    pub fn is_empty(&self) -> bool {
        self.kind == MotionKind::Undefined
    }
}

// ============================================================================
// Input Event Holder
// ============================================================================

/// Discriminant for [`InputEvent`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    Mouse,
    Key,
    Touch,
    Gesture,
    Motion,
}

/// Closed sum over the five concrete input event types
///
/// One `InputEvent` holds exactly one payload. The typed accessors assert
/// the stored tag: calling `key()` on a mouse-tagged event panics rather
/// than returning a valid-looking `KeyEvent`.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Keyboard event
    Key(KeyEvent),
    /// Touch event (mobile/touchscreen)
    Touch(TouchEvent),
    /// Gesture event
    Gesture(GestureEvent),
    /// Device motion event
    Motion(MotionEvent),
}

impl InputEvent {
    /// Which variant is stored
    pub fn kind(&self) -> InputKind {
        match self {
            InputEvent::Mouse(_) => InputKind::Mouse,
            InputEvent::Key(_) => InputKind::Key,
            InputEvent::Touch(_) => InputKind::Touch,
            InputEvent::Gesture(_) => InputKind::Gesture,
            InputEvent::Motion(_) => InputKind::Motion,
        }
    }

    /// The mouse payload
    ///
    /// # Panics
    ///
    /// Panics if the stored event is not a mouse event.
    pub fn mouse(&self) -> &MouseEvent {
        match self {
            InputEvent::Mouse(event) => event,
            other => panic!("input event is {:?}, not a mouse event", other.kind()),
        }
    }

    /// The keyboard payload
    ///
    /// # Panics
    ///
    /// Panics if the stored event is not a keyboard event.
    pub fn key(&self) -> &KeyEvent {
        match self {
            InputEvent::Key(event) => event,
            other => panic!("input event is {:?}, not a key event", other.kind()),
        }
    }

    /// The touch payload
    ///
    /// # Panics
    ///
    /// Panics if the stored event is not a touch event.
    pub fn touch(&self) -> &TouchEvent {
        match self {
            InputEvent::Touch(event) => event,
            other => panic!("input event is {:?}, not a touch event", other.kind()),
        }
    }

    /// The gesture payload
    ///
    /// # Panics
    ///
    /// Panics if the stored event is not a gesture event.
    pub fn gesture(&self) -> &GestureEvent {
        match self {
            InputEvent::Gesture(event) => event,
            other => panic!("input event is {:?}, not a gesture event", other.kind()),
        }
    }

    /// The motion payload
    ///
    /// # Panics
    ///
    /// Panics if the stored event is not a motion event.
    pub fn motion(&self) -> &MotionEvent {
        match self {
            InputEvent::Motion(event) => event,
            other => panic!("input event is {:?}, not a motion event", other.kind()),
        }
    }

    /// Whether the stored payload is its empty sentinel
    pub fn is_empty(&self) -> bool {
        match self {
            InputEvent::Mouse(event) => event.is_empty(),
            InputEvent::Key(event) => event.is_empty(),
            InputEvent::Touch(event) => event.is_empty(),
            InputEvent::Gesture(event) => event.is_empty(),
            InputEvent::Motion(event) => event.is_empty(),
        }
    }
}

impl From<MouseEvent> for InputEvent {
    fn from(event: MouseEvent) -> Self {
        InputEvent::Mouse(event)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}

impl From<TouchEvent> for InputEvent {
    fn from(event: TouchEvent) -> Self {
        InputEvent::Touch(event)
    }
}

impl From<GestureEvent> for InputEvent {
    fn from(event: GestureEvent) -> Self {
        InputEvent::Gesture(event)
    }
}

impl From<MotionEvent> for InputEvent {
    fn from(event: MotionEvent) -> Self {
        InputEvent::Motion(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_default_events_are_empty() {
        assert!(MouseEvent::default().is_empty());
        assert!(KeyEvent::default().is_empty());
        assert!(TouchEvent::default().is_empty());
        assert!(GestureEvent::default().is_empty());
        assert!(MotionEvent::default().is_empty());
    }

    #[test]
    fn test_constructed_events_are_not_empty() {
        let position = Point::new(10.0, 20.0);
        assert!(!MouseEvent::down(position, MouseButton::Left, Modifiers::default()).is_empty());
        assert!(!KeyEvent::down(Key::A, Modifiers::default()).is_empty());
        assert!(!TouchEvent::new(TouchKind::Begin, smallvec![TouchPoint::new(1, position)])
            .is_empty());
        assert!(!GestureEvent::new(GestureKind::Begin, TouchPoints::new()).is_empty());
        assert!(!MotionEvent::new(MotionKind::Begin).is_empty());
    }

    #[test]
    fn test_holder_roundtrip() {
        let mouse = MouseEvent::down(Point::new(3.0, 4.0), MouseButton::Right, Modifiers::default());
        let event = InputEvent::from(mouse);
        assert_eq!(event.kind(), InputKind::Mouse);
        assert_eq!(*event.mouse(), mouse);

        let key = KeyEvent::up(Key::Space, Modifiers::default());
        let event = InputEvent::from(key);
        assert_eq!(event.kind(), InputKind::Key);
        assert_eq!(*event.key(), key);
    }

    #[test]
    #[should_panic(expected = "not a key event")]
    fn test_wrong_variant_access_panics() {
        let event = InputEvent::from(MouseEvent::enter(Point::ZERO));
        let _ = event.key();
    }

    #[test]
    #[should_panic(expected = "not a touch event")]
    fn test_motion_is_not_touch() {
        let event = InputEvent::from(MotionEvent::new(MotionKind::End));
        let _ = event.touch();
    }

    #[test]
    fn test_touch_primary() {
        let a = TouchPoint::new(1, Point::new(1.0, 1.0));
        let b = TouchPoint::new(2, Point::new(2.0, 2.0));
        let event = TouchEvent::new(TouchKind::Move, smallvec![a, b]);
        assert_eq!(event.primary(), Some(&a));
        assert_eq!(TouchEvent::default().primary(), None);
    }

    #[test]
    fn test_modifiers_predicates() {
        let shift = Modifiers {
            shift: true,
            ..Default::default()
        };
        assert!(shift.shift_only());
        assert!(!shift.is_empty());
        assert!(Modifiers::default().is_empty());
    }
}
