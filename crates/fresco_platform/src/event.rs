//! Application events, the opaque rendering context, and the event loop
//!
//! Platform backends construct one [`AppEvent`] per lifecycle callback
//! (setup/update/draw/exit) carrying the current rendering context, view
//! size, and display scale. The core never interprets the context handle,
//! it only threads it through to the sketch for the duration of the
//! callback.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use fresco_core::Size;

use crate::error::PlatformError;
use crate::input::InputEvent;
use crate::window::Window;

/// Type-erased handle to the platform's native rendering context
///
/// Valid only during the callback that delivered it; the handle must not be
/// retained across frames. An empty holder is used for lifecycle callbacks
/// that have no context, such as teardown during drop.
#[derive(Clone, Default)]
pub struct ContextHolder {
    context: Option<Arc<dyn Any + Send + Sync>>,
}

impl ContextHolder {
    /// Wrap a native rendering context
    pub fn new<T: Any + Send + Sync>(context: Arc<T>) -> Self {
        Self {
            context: Some(context),
        }
    }

    /// The empty holder
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any context is held
    pub fn is_empty(&self) -> bool {
        self.context.is_none()
    }

    /// Downcast to the concrete context type the backend supplied
    ///
    /// Returns `None` when the holder is empty or holds a different type.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.context.as_deref().and_then(|c| c.downcast_ref())
    }
}

impl fmt::Debug for ContextHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextHolder")
            .field("empty", &self.is_empty())
            .finish()
    }
}

/// Per-callback record carrying rendering context, view size, and scale
///
/// Read-only; backends construct a fresh one for every callback.
#[derive(Clone, Debug)]
pub struct AppEvent {
    context: ContextHolder,
    size: Size,
    scale: f64,
}

impl AppEvent {
    pub fn new(context: ContextHolder, size: Size, scale: f64) -> Self {
        Self {
            context,
            size,
            scale,
        }
    }

    /// The opaque rendering context for this callback
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

    /// Display scale factor (DPI scaling)
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for AppEvent {
    /// The empty event: no context, zero size, scale 1.0
    ///
    /// Used for implicit teardown, where no live view exists anymore.
    fn default() -> Self {
        Self {
            context: ContextHolder::empty(),
            size: Size::ZERO,
            scale: 1.0,
        }
    }
}

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Platform events delivered by the event loop
#[derive(Clone, Debug)]
pub enum PlatformEvent {
    /// Window-related event
    Window(WindowEvent),
    /// Input event (mouse, keyboard, touch, gesture, motion)
    Input(InputEvent),
    /// Application lifecycle event
    Lifecycle(LifecycleEvent),
    /// Frame tick - time to render
    ///
    /// Sent once per display refresh when the view is ready to draw.
    Frame,
}

/// Window events
#[derive(Clone, Debug)]
pub enum WindowEvent {
    /// Window was resized
    Resized {
        /// New width in logical pixels
        width: f32,
        /// New height in logical pixels
        height: f32,
    },
    /// Window close was requested (e.g., close button clicked)
    CloseRequested,
    /// Window gained or lost focus
    Focused(bool),
    /// Display scale factor changed
    ScaleFactorChanged {
        /// New scale factor
        scale_factor: f64,
    },
}

/// Application lifecycle events
#[derive(Clone, Debug)]
pub enum LifecycleEvent {
    /// Application resumed (came to foreground)
    Resumed,
    /// Application suspended (went to background)
    Suspended,
    /// System is low on memory - release caches if possible
    LowMemory,
}

/// Event loop abstraction
///
/// Platform-specific event loops implement this trait to drive Fresco
/// runners: forward each input event as it arrives, then deliver one
/// [`PlatformEvent::Frame`] per display refresh tick.
pub trait EventLoop {
    /// The window type for this event loop
    type Window: Window;

    /// Run the event loop
    ///
    /// Blocks until the application exits. The handler is called for each
    /// event and returns a [`ControlFlow`] to continue or exit.
    fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(PlatformEvent, &Self::Window) -> ControlFlow + 'static;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_default() {
        assert_eq!(ControlFlow::default(), ControlFlow::Continue);
    }

    #[test]
    fn test_empty_app_event() {
        let event = AppEvent::default();
        assert!(event.context().is_empty());
        assert_eq!(event.size(), Size::ZERO);
        assert_eq!(event.scale(), 1.0);
    }

    #[test]
    fn test_context_holder_downcast() {
        struct FakeContext {
            frame: u64,
        }

        let holder = ContextHolder::new(Arc::new(FakeContext { frame: 7 }));
        assert!(!holder.is_empty());
        assert_eq!(holder.get::<FakeContext>().map(|c| c.frame), Some(7));
        assert!(holder.get::<u32>().is_none());
        assert!(ContextHolder::empty().get::<FakeContext>().is_none());
    }
}
