//! Session-Zustand des Push-Pull-Flächeneditors.

use glam::Vec3;

use super::super::common::{Axis, Plane};
use crate::core::Volume;

/// Laufende Push-Pull-Session auf genau einem Volume.
#[derive(Debug, Clone, PartialEq)]
pub struct PushPullSession {
    pub target_id: u64,
    /// Korrelations-ID des greifenden Zeigers
    pub pointer_id: u64,
    /// Auf Hauptachse gerastete, vorzeichenbehaftete Flächennormale des Griffs
    pub clicked_axis: Vec3,
    /// Drag-Ebene durch den Treffpunkt, zum Betrachter orientiert
    pub drag_plane: Plane,
    /// Treffpunkt beim Griff
    pub start_point: Vec3,
    /// Ausdehnungen beim Griff (x = Länge, y = Höhe, z = Breite)
    pub start_extents: Vec3,
    /// Zentrum beim Griff
    pub start_center: Vec3,
    /// Aktive Achsensperre (Taste x/y/z, erneut = aufheben)
    pub axis_lock: Option<Axis>,
    /// Snapshot vor Beginn (für das Update-Command am Ende)
    pub before: Volume,
    /// Selektion vor Beginn (der Griff erzwingt Einzelauswahl)
    pub selection_before: Vec<u64>,
}
