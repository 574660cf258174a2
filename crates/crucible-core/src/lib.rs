//! **crucible-core** — Core types for run-constrained grid pathfinding.
//!
//! This crate provides the foundational types shared across the *crucible*
//! workspace: geometry primitives, cardinal directions, and the immutable
//! [`CostGrid`] that searches read entry costs from.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Point, Range};
pub use grid::{CostGrid, GridError};
