//! Session-Zustand des Verschiebe-Controllers.

use glam::Vec3;

use super::super::common::Plane;
use crate::core::Volume;

/// Laufende Verschiebe-Session über der gesamten Selektion.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Gegriffenes Volume; alle Deltas werden relativ zu ihm berechnet
    pub anchor_id: u64,
    /// Korrelations-ID des greifenden Zeigers
    pub pointer_id: u64,
    /// Horizontale Drag-Ebene auf Basis-Höhe des Ankers
    pub plane: Plane,
    /// Versatz Ebenen-Schnittpunkt → Anker-Zentrum (y = 0)
    pub offset: Vec3,
    /// Snapshots der gesamten Selektion vor Beginn
    pub before: Vec<Volume>,
}
