//! Application-Layer: Controller, State, Events, Sessions und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung
/// (Registry, Selektion, Modi, aktive Session).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PickResult, PointerModifiers};
pub use history::{CommandRecord, CommandStack, SnapshotPair};
pub use render_scene::{build as build_render_scene, hover_face};
pub use state::{
    ActiveSession, AppState, DimensionFields, EditorToolState, FieldId, SelectionState, SessionKind,
};
pub use tools::common::{Axis, Plane, Ray};
