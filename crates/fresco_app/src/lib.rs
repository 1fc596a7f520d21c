//! Fresco Application Framework
//!
//! The sketch/runner lifecycle at the heart of Fresco: a [`Runner`] owns a
//! [`Runnable`] and gates its lifecycle (setup exactly once, teardown
//! exactly once, inert afterwards); a [`Sketch`] implements [`Runnable`]
//! on top of user [`SketchHooks`], buffering input events between frames
//! and draining them in arrival order after each draw so sketch code sees
//! stable per-frame snapshots.
//!
//! # Example
//!
//! ```
//! use fresco_app::prelude::*;
//!
//! struct Trail {
//!     points: Vec<Point>,
//! }
//!
//! impl SketchHooks for Trail {
//!     fn draw(&mut self, state: &mut SketchState) {
//!         // state.mouse() is stable for the whole frame
//!         let _ = state.mouse();
//!     }
//!
//!     fn mouse_dragged(&mut self, state: &mut SketchState) {
//!         // runs after draw, once per queued drag, in arrival order
//!         self.points.push(state.mouse());
//!     }
//! }
//!
//! let mut runner = Runner::new(Box::new(Sketch::new(Trail { points: Vec::new() })));
//! runner.draw(&AppEvent::default());
//! ```

mod app;
mod error;
mod layer;
mod runnable;
mod runner;
mod sketch;

#[cfg(test)]
mod tests;

pub use app::App;
pub use error::{AppError, Result};
pub use layer::{LayerId, LayerTree};
pub use runnable::Runnable;
pub use runner::Runner;
pub use sketch::{Sketch, SketchConfig, SketchHooks, SketchState};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::App;
    pub use crate::error::{AppError, Result};
    pub use crate::layer::{LayerId, LayerTree};
    pub use crate::runnable::Runnable;
    pub use crate::runner::Runner;
    pub use crate::sketch::{Sketch, SketchConfig, SketchHooks, SketchState};

    // Core value types
    pub use fresco_core::{Color, Point, Rect, Size, Vec2, Vec3};

    // Platform types
    pub use fresco_platform::prelude::*;

    // Animation
    pub use fresco_animation::{Easing, Timeline, Tween};
}
