//! # ShelfKit Core
//!
//! Core types and utilities shared by the ShelfKit crates.
//! Provides planar geometry helpers used while tracing flat panels and
//! conversions between metric and imperial lengths.

pub mod geometry;
pub mod units;

pub use geometry::{Bounds, Frame, Point, Turtle};
pub use units::MeasurementSystem;
