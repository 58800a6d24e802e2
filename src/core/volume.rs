//! Das Volume-Datenmodell: achsenparalleler Quader über der Bodenebene.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// UVW-Herkunftsmaße einer Wand (U = Lauflänge, V = Höhe, W = Dicke).
///
/// Nur gesetzt wenn das Volume über den Wand-Builder erstellt wurde;
/// der Selektions-Handler nutzt das Flag um den Bearbeitungsmodus zu armieren.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvwExtents {
    pub u: f32,
    pub v: f32,
    pub w: f32,
}

/// Achsenparalleler Quader im Register (Takeoff-Box oder Wand).
///
/// Invarianten:
/// - `center.y == base_elevation + height / 2.0` zu jedem Zeitpunkt
/// - `length >= 1`, `width >= 1`, `height >= 0` (Welteinheiten = mm)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Eindeutige, monoton vergebene ID
    pub id: u64,
    /// Ausdehnung entlang der lokalen X-Achse
    pub length: f32,
    /// Ausdehnung entlang der lokalen Z-Achse
    pub width: f32,
    /// Ausdehnung entlang der Hochachse
    pub height: f32,
    /// Welt-Y der Unterseite
    pub base_elevation: f32,
    /// Weltposition des Zentrums
    pub center: Vec3,
    /// Drehung um die Hochachse (atan2 der U-Richtung, Radiant)
    pub orientation: f32,
    /// UVW-Maße, falls über den Wand-Builder erstellt
    pub uvw: Option<UvwExtents>,
}

impl Volume {
    /// Erstellt ein Volume aus Bodenmaßen; `center.y` wird aus
    /// `base_elevation + height / 2` abgeleitet.
    pub fn new(
        id: u64,
        length: f32,
        width: f32,
        height: f32,
        base_elevation: f32,
        center_x: f32,
        center_z: f32,
    ) -> Self {
        Self {
            id,
            length,
            width,
            height,
            base_elevation,
            center: Vec3::new(center_x, base_elevation + height / 2.0, center_z),
            orientation: 0.0,
            uvw: None,
        }
    }

    /// Welt-Y der Oberseite.
    pub fn top_elevation(&self) -> f32 {
        self.base_elevation + self.height
    }

    /// Halbe Ausdehnung entlang X.
    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    /// Halbe Ausdehnung entlang Z.
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Stellt `center.y == base_elevation + height / 2` wieder her.
    ///
    /// Nach jeder Mutation von `base_elevation` oder `height` aufrufen,
    /// die das Zentrum nicht selbst neu setzt.
    pub fn resync_center_height(&mut self) {
        self.center.y = self.base_elevation + self.height / 2.0;
    }

    /// Ausdehnung entlang einer Weltachse (x/y/z) als Vektor-Komponenten.
    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.length, self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_center_height() {
        let v = Volume::new(1, 500.0, 300.0, 2700.0, 100.0, 250.0, -150.0);
        assert_eq!(v.center, Vec3::new(250.0, 1450.0, -150.0));
        assert_eq!(v.top_elevation(), 2800.0);
    }

    #[test]
    fn resync_restores_invariant() {
        let mut v = Volume::new(1, 500.0, 300.0, 2700.0, 0.0, 0.0, 0.0);
        v.height = 1000.0;
        v.base_elevation = 50.0;
        v.resync_center_height();
        assert_eq!(v.center.y, 550.0);
    }
}
