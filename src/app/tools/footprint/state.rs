//! Session-Zustand des Footprint-Zeichnens.

use glam::Vec3;

/// Laufende Zeichen-Session: erster Klick gesetzt, Endpunkt provisorisch.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSession {
    /// Erster Boden-Klick (Ursprungs-Ecke)
    pub origin: Vec3,
    /// Provisorischer Endpunkt nach Override-Präzedenz
    pub provisional_end: Vec3,
    /// Letzter Bodenpunkt unter dem Zeiger (für Feld-Live-Updates)
    pub last_ground: Option<Vec3>,
    /// Operator hat das Seitenpanel-Längenfeld in dieser Session beschrieben
    pub panel_length_manual: bool,
    /// Operator hat das Seitenpanel-Breitenfeld in dieser Session beschrieben
    pub panel_width_manual: bool,
}

impl DrawSession {
    /// Startet eine Session am Ursprungs-Klick.
    pub fn new(origin: Vec3) -> Self {
        Self {
            origin,
            provisional_end: origin,
            last_ground: None,
            panel_length_manual: false,
            panel_width_manual: false,
        }
    }
}
