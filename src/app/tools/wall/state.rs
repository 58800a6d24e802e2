//! Session-Zustand des Wand-Builders (UVW-Schrittmaschine).

use glam::Vec3;

/// Aktueller Konstruktionsschritt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallStep {
    /// U: horizontale Lauflänge, per Zeiger gerichtet
    DefiningU,
    /// V: Höhe, Richtung fest vertikal
    DefiningV,
    /// W: Dicke, Richtung fest senkrecht zu U
    DefiningW,
}

/// Eine Konstruktionsachse: Einheitsrichtung plus Länge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallAxis {
    pub direction: Vec3,
    pub length: f32,
}

impl WallAxis {
    pub fn new(direction: Vec3, length: f32) -> Self {
        Self { direction, length }
    }
}

/// Laufende Wand-Session.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSession {
    pub step: WallStep,
    /// Erster Boden-Klick (Start-Ecke der Wand)
    pub origin: Vec3,
    /// U-Achse; Richtung startet bei +X und folgt dem Zeiger
    pub u: WallAxis,
    /// V-Achse, gesetzt ab Schritt V (Richtung immer vertikal)
    pub v: Option<WallAxis>,
    /// W-Achse, gesetzt ab Schritt W (Richtung senkrecht zu U)
    pub w: Option<WallAxis>,
    /// Letzter Bodenpunkt unter dem Zeiger
    pub last_pointer: Option<Vec3>,
    /// Bearbeitungsmodus: ID der bestehenden Wand (None = Neuanlage)
    pub editing_target: Option<u64>,
}

impl WallSession {
    /// Startet eine neue Session am Ursprungs-Klick.
    pub fn new(origin: Vec3) -> Self {
        Self {
            step: WallStep::DefiningU,
            origin,
            u: WallAxis::new(Vec3::X, 0.0),
            v: None,
            w: None,
            last_pointer: Some(origin),
            editing_target: None,
        }
    }
}
