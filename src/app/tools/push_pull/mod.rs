//! Push-Pull: Einzelflächen-Resize mit fixierter Gegenfläche und Achsensperre.

pub mod lifecycle;
pub mod state;

#[cfg(test)]
mod tests;

pub use state::PushPullSession;
