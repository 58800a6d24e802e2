//! Zentrale Konfiguration für den QS Takeoff Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Alle Längen in Welteinheiten (mm).

use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Fangradius des Feature-Snaps: Punkte innerhalb rasten auf Ecken/Mitten ein.
pub const FEATURE_SNAP_RADIUS: f32 = 150.0;
/// Standard-Rasterweite des Grid-Snaps.
pub const GRID_STEP: f32 = 10.0;
/// Standard-Inkrement des Winkel-Snaps (Grad).
pub const ANGLE_SNAP_INCREMENT_DEG: f32 = 45.0;

// ── Geometrie-Defaults ──────────────────────────────────────────────

/// Standard-Höhe neuer Volumes (Wandhöhe 2.70 m).
pub const DEFAULT_HEIGHT: f32 = 2700.0;
/// Standard-Basis-Höhe neuer Volumes.
pub const DEFAULT_BASE_ELEVATION: f32 = 0.0;
/// Standard-Wanddicke des Wand-Builders.
pub const DEFAULT_WALL_THICKNESS: f32 = 230.0;
/// Minimale horizontale Ausdehnung eines Volumes.
pub const MIN_HORIZONTAL_EXTENT: f32 = 1.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Skalierung des Push-Pull-Deltas bei gedrücktem Feinjustier-Modifier.
pub const FINE_ADJUST_FACTOR: f32 = 0.25;
/// Maximale Tiefe des Undo/Redo-Stacks.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `qs_takeoff_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Grid-Snap aktiv
    pub grid_snap_enabled: bool,
    /// Rasterweite des Grid-Snaps (wird auf mindestens 1 geklemmt)
    pub grid_step: f32,
    /// Fangradius des Feature-Snaps
    #[serde(default = "default_feature_snap_radius")]
    pub feature_snap_radius: f32,
    /// Winkel-Snap im Wand-Builder aktiv
    pub angle_snap_enabled: bool,
    /// Inkrement des Winkel-Snaps (Grad)
    pub angle_snap_increment_deg: f32,

    // ── Geometrie-Defaults ──────────────────────────────────────
    /// Standard-Höhe neuer Volumes
    pub default_height: f32,
    /// Standard-Basis-Höhe neuer Volumes
    pub default_base_elevation: f32,
    /// Standard-Wanddicke des Wand-Builders
    #[serde(default = "default_wall_thickness")]
    pub default_wall_thickness: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_snap_enabled: true,
            grid_step: GRID_STEP,
            feature_snap_radius: FEATURE_SNAP_RADIUS,
            angle_snap_enabled: false,
            angle_snap_increment_deg: ANGLE_SNAP_INCREMENT_DEG,
            default_height: DEFAULT_HEIGHT,
            default_base_elevation: DEFAULT_BASE_ELEVATION,
            default_wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

/// Serde-Default für `feature_snap_radius` (Abwärtskompatibilität).
fn default_feature_snap_radius() -> f32 {
    FEATURE_SNAP_RADIUS
}

/// Serde-Default für `default_wall_thickness` (Abwärtskompatibilität).
fn default_wall_thickness() -> f32 {
    DEFAULT_WALL_THICKNESS
}

impl EditorOptions {
    /// Effektive Rasterweite: konfigurierter Wert, mindestens 1.
    pub fn effective_grid_step(&self) -> f32 {
        self.grid_step.max(1.0)
    }

    /// Rasterweite für Snap-Abfragen: `Some(step)` nur wenn Grid-Snap aktiv.
    pub fn grid_step_if_enabled(&self) -> Option<f32> {
        self.grid_snap_enabled
            .then(|| self.effective_grid_step())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("qs_takeoff_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("qs_takeoff_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_step_is_clamped_to_one() {
        let mut options = EditorOptions::default();
        options.grid_step = 0.25;
        assert_eq!(options.effective_grid_step(), 1.0);
    }

    #[test]
    fn grid_step_if_enabled_respects_toggle() {
        let mut options = EditorOptions::default();
        assert_eq!(options.grid_step_if_enabled(), Some(GRID_STEP));
        options.grid_snap_enabled = false;
        assert_eq!(options.grid_step_if_enabled(), None);
    }

    #[test]
    fn options_roundtrip_toml() {
        let options = EditorOptions::default();
        let toml_str = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&toml_str).expect("parsebar");
        assert_eq!(parsed, options);
    }
}
