//! **perfect_mazes** carves perfect mazes (spanning trees over a rectangular grid) with a
//! randomized backtracker and exposes the result as boolean wall grids.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod layout;
pub mod pathing;
pub mod shuffle;
pub mod units;
pub mod validation;
