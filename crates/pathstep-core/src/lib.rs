//! **pathstep-core**: grid data model for the stepwise pathfinding visualizer.
//!
//! This crate provides the types shared by the search engine and its front
//! ends: geometry primitives, typed cells, a shared-handle grid that keeps
//! a single start and a single end cell, zoom limits, and the cell palette.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod style;
pub mod zoom;

pub use cell::{Cell, CellType, UnknownCellType};
pub use geom::{Point, Range, Vec2};
pub use grid::{Grid, GridConfig, GridError};
pub use style::Color;
pub use zoom::ZoomConfig;
