//! Editor-Modi und Feldzustand.

use super::fields::DimensionFields;

/// Zustand der Editor-Modi (extern umgeschaltet) plus Eingabefelder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorToolState {
    /// Wand-Modus: Boden-Klicks starten den UVW-Builder statt des Footprints
    pub wall_mode: bool,
    /// Push-Pull aktiviert: Klick auf ein Volume greift dessen Fläche
    pub push_pull_enabled: bool,
    /// Aktuelle Werte der Dimensions-Eingabefelder
    pub fields: DimensionFields,
}

impl EditorToolState {
    /// Erstellt den Standard-Modus (Box-Zeichnen, Push-Pull aus).
    pub fn new() -> Self {
        Self::default()
    }
}
