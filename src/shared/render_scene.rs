//! Reine Daten für den externen Renderer.
//!
//! Der Editor-Kern rendert nicht selbst; er veröffentlicht pro Frame eine
//! `RenderScene`, die der Host ohne Rückmutationen abliest.

use glam::Vec3;

/// Darstellungsdaten eines Volumes.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeVisual {
    pub id: u64,
    pub center: Vec3,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    /// Drehung um die Hochachse (Radiant)
    pub orientation: f32,
    pub selected: bool,
}

/// Vorschau-Geometrie als Polylinien-Daten: Punkte plus Index-Paare.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewGeometry {
    pub points: Vec<Vec3>,
    /// Liniensegmente als Index-Paare in `points`
    pub segments: Vec<(usize, usize)>,
}

impl PreviewGeometry {
    /// Geschlossener Linienzug durch die übergebenen Punkte.
    pub fn closed_loop(points: Vec<Vec3>) -> Self {
        let n = points.len();
        let segments = (0..n).map(|i| (i, (i + 1) % n)).collect();
        Self { points, segments }
    }

    /// Einzelnes Liniensegment.
    pub fn line(a: Vec3, b: Vec3) -> Self {
        Self {
            points: vec![a, b],
            segments: vec![(0, 1)],
        }
    }
}

/// Hervorhebung der Fläche, die ein Push-Pull-Griff greifen würde.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHighlight {
    /// Zentrum der Fläche in Weltkoordinaten
    pub center: Vec3,
    /// Flächennormale (vorzeichenbehaftete Einheitsachse)
    pub normal: Vec3,
    /// Halbe Flächenausdehnung (Breite, Höhe in Flächenebene)
    pub half_extents: (f32, f32),
}

/// Komplette Szene für einen Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    pub volumes: Vec<VolumeVisual>,
    /// Vorschau der aktiven Session (Footprint-Rechteck, Wand-Drahtgitter)
    pub preview: Option<PreviewGeometry>,
}
