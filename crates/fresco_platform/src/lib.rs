//! Fresco Platform Abstraction Layer
//!
//! This crate provides platform-agnostic traits and types for windowing,
//! input handling, and the application lifecycle of Fresco sketches.
//!
//! # Architecture
//!
//! The platform abstraction is built around three main traits:
//!
//! - [`Platform`] - The top-level platform abstraction
//! - [`Window`] - Window management and properties
//! - [`EventLoop`] - Event delivery and frame ticks
//!
//! Backends construct one typed event per OS callback and forward it to a
//! runner's matching input method, then deliver [`PlatformEvent::Frame`]
//! once per display refresh with a fresh [`AppEvent`] carrying the current
//! size, scale, and rendering context.
//!
//! # Example
//!
//! ```ignore
//! use fresco_platform::prelude::*;
//!
//! fn main() -> Result<(), PlatformError> {
//!     let platform = DesktopPlatform::new()?;
//!     let event_loop = platform.create_event_loop()?;
//!
//!     event_loop.run(|event, window| {
//!         match event {
//!             PlatformEvent::Frame => {
//!                 // Drive the runner's draw
//!             }
//!             PlatformEvent::Window(WindowEvent::CloseRequested) => {
//!                 return ControlFlow::Exit;
//!             }
//!             _ => {}
//!         }
//!         ControlFlow::Continue
//!     })
//! }
//! ```

mod error;
mod event;
mod input;
mod platform;
mod window;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{
    AppEvent, ContextHolder, ControlFlow, EventLoop, LifecycleEvent, PlatformEvent, WindowEvent,
};
pub use input::{
    GestureEvent, GestureKind, InputEvent, InputKind, Key, KeyEvent, KeyKind, Modifiers,
    MouseButton, MouseEvent, MouseKind, MotionEvent, MotionKind, TouchEvent, TouchKind, TouchPoint,
    TouchPoints,
};
pub use platform::Platform;
pub use window::{Cursor, Window, WindowConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{
        AppEvent, ContextHolder, ControlFlow, EventLoop, LifecycleEvent, PlatformEvent,
        WindowEvent,
    };
    pub use crate::input::{
        GestureEvent, GestureKind, InputEvent, InputKind, Key, KeyEvent, KeyKind, Modifiers,
        MouseButton, MouseEvent, MouseKind, MotionEvent, MotionKind, TouchEvent, TouchKind,
        TouchPoint, TouchPoints,
    };
    pub use crate::platform::Platform;
    pub use crate::window::{Cursor, Window, WindowConfig};
}
