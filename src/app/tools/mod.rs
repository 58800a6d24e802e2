//! Editier-Sessions: Footprint-Zeichnen, Wand-Builder, Push-Pull, Verschieben.
//!
//! Jede Session lebt als Variante in `ActiveSession`; die Lifecycle-Module
//! mutieren den AppState und zeichnen am Ende ihr Command auf. Die Mutation
//! läuft ausschließlich über die Handler-Schicht.

pub mod common;
pub mod drag;
pub mod footprint;
pub mod push_pull;
pub mod wall;
