//! Wand-Builder: sequentielle UVW-Konstruktion orientierter Wände.

pub mod geometry;
pub mod lifecycle;
pub mod state;


pub use state::{WallAxis, WallSession, WallStep};
