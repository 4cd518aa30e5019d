//! **gridsolve-core** — coordinates and grids for puzzle solving (core types).
//!
//! This crate provides the value types shared across the *gridsolve*
//! workspace: 2D and 3D integer points with neighbour enumeration, and
//! rectangular grids addressed by those points.

pub mod geom;
pub mod geom3;
pub mod grid;
pub mod grid3;

pub use geom::{Dimension, Point, Range, TURN_CLOCKWISE, TURN_COUNTER_CLOCKWISE};
pub use geom3::{Dimension3, Point3};
pub use grid::{Grid, GridError};
pub use grid3::Grid3;
