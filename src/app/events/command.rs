//! App-Commands: semantische Operationen auf dem AppState.

use glam::Vec3;

use crate::app::state::FieldId;
use crate::app::tools::common::{Axis, Ray};
use crate::shared::EditorOptions;

/// Mutierende Operationen, vom Intent-Mapping erzeugt und vom Controller
/// an die Feature-Handler dispatcht.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Selektion ===
    SetSingleSelection { id: u64 },
    ToggleSelection { id: u64 },
    ClearSelection,

    // === Footprint-Zeichnen ===
    BeginFootprint { origin: Vec3 },
    UpdateFootprint { ground: Vec3 },
    CommitFootprint,

    // === Wand-Builder ===
    BeginWall { origin: Vec3 },
    UpdateWall { ground: Vec3 },
    ConfirmWallStep,
    CompleteWall,

    // === Push-Pull ===
    BeginPushPull {
        id: u64,
        pointer_id: u64,
        point: Vec3,
        normal: Vec3,
        ray: Ray,
    },
    UpdatePushPull { ray: Ray, fine_adjust: bool },
    EndPushPull,
    ToggleAxisLock { axis: Axis },
    ClearAxisLock,

    // === Verschieben ===
    BeginDrag {
        id: u64,
        pointer_id: u64,
        ray: Ray,
    },
    UpdateDrag { ray: Ray },
    EndDrag,

    // === Session-Steuerung ===
    CancelSession,

    // === Editing ===
    DeleteSelected,
    ApplyFieldsToSelection,
    ClearAll,
    SetField { field: FieldId, value: Option<f32> },

    // === Modi & Optionen ===
    SetWallMode { enabled: bool },
    SetPushPullEnabled { enabled: bool },
    ApplyOptions { options: EditorOptions },

    // === History ===
    Undo,
    Redo,
}
