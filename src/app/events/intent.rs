//! App-Intents: Eingaben aus Host/System ohne direkte Mutationslogik.
//!
//! Das Raycasting gehört dem Host: Zeiger-Intents bringen das fertige
//! Pick-Ergebnis (Bodenpunkt oder Volume-Treffer) plus den Weltstrahl mit.

use glam::Vec3;

use crate::app::tools::common::{Axis, Ray};
use crate::app::state::FieldId;
use crate::shared::EditorOptions;

/// Pick-Ergebnis des externen Raycasters für einen Bildschirmpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickResult {
    /// Weder Volume noch Bodenebene getroffen
    None,
    /// Punkt auf der Bodenebene (roh, vor Snapping)
    Ground(Vec3),
    /// Volume-Treffer mit Welt-Treffpunkt und Welt-Flächennormale
    Volume { id: u64, point: Vec3, normal: Vec3 },
}

/// Modifier-Flags eines Zeiger-Events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerModifiers {
    /// Sekundär-Selektion (Ctrl/Cmd): Selektion umschalten statt ersetzen
    pub secondary_select: bool,
    /// Feinjustierung (Shift): Push-Pull-Delta skalieren
    pub fine_adjust: bool,
    /// Verschieben erzwingen (Alt): Push-Pull-Griff übergehen
    pub move_override: bool,
}

/// Eingabe-Events aus Host/System.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärer Zeiger gedrückt
    PointerPressed {
        pointer_id: u64,
        ray: Ray,
        pick: PickResult,
        modifiers: PointerModifiers,
    },
    /// Zeiger bewegt
    PointerMoved {
        pointer_id: u64,
        ray: Ray,
        pick: PickResult,
        modifiers: PointerModifiers,
    },
    /// Zeiger losgelassen
    PointerReleased { pointer_id: u64 },
    /// Zeiger-Eingabe vom System abgebrochen
    PointerCancelled { pointer_id: u64 },

    /// Bestätigen (Enter): Session abschließen bzw. Wand-Schritt sperren
    ConfirmRequested,
    /// Abbrechen (Escape)
    CancelRequested,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Selektierte Volumes löschen
    DeleteSelectedRequested,
    /// Achsensperre umschalten (Taste x/y/z während Push-Pull)
    AxisLockToggled { axis: Axis },

    /// Eingabefeld geändert (`None` = geleert)
    FieldChanged { field: FieldId, value: Option<f32> },
    /// Seitenpanel-Werte auf die Selektion anwenden
    ApplyFieldsRequested,
    /// Alle Volumes entfernen
    ClearAllRequested,

    /// Wand-Modus umgeschaltet
    WallModeToggled { enabled: bool },
    /// Push-Pull umgeschaltet
    PushPullToggled { enabled: bool },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
}
