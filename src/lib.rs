//! QS Takeoff Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorToolState, SelectionState, SessionKind,
};
pub use core::{build_report, QuantityReport, SessionFlags, UvwExtents, Volume, VolumeRegistry};
pub use shared::{EditorOptions, RenderScene};
