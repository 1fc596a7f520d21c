//! Fresco Core Value Types
//!
//! This crate provides the foundational value types for the Fresco
//! creative-coding framework:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`], [`Vec2`], [`Vec3`]
//! - **Color**: [`Color`] with preset constants and interpolation
//!
//! All types are plain `Copy` data with no behavior beyond arithmetic;
//! rendering, input, and lifecycle live in the sibling crates.

mod color;
mod geometry;

pub use color::Color;
pub use geometry::{Point, Rect, Size, Vec2, Vec3};
