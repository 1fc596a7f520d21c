//! Fresco Animation System
//!
//! Easing presets, timed tweens, and timeline orchestration.
//!
//! # Features
//!
//! - **Easing Presets**: the standard curve families (Quad through Bounce)
//! - **Tweens**: timed interpolation with delay, looping, and yoyo
//! - **Typed Animations**: generic over anything [`Interpolate`]
//! - **Timelines**: pausable clocks that own and advance animations,
//!   referenced by layers through parent delegation

pub mod easing;
pub mod timeline;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use timeline::{Animate, Timeline, TweenId};
pub use tween::Tween;
pub use values::Interpolate;
