//! Anwendungszustand: Registry, Selektion, Editor-Modi, aktive Session.

pub mod app_state;
pub mod editor;
pub mod fields;
pub mod selection;
pub mod session;

pub use app_state::AppState;
pub use editor::EditorToolState;
pub use fields::{DimensionFields, FieldId};
pub use selection::SelectionState;
pub use session::{ActiveSession, SessionKind};
