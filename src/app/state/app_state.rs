//! Hauptzustand der Anwendung.

use crate::app::command_log::CommandLog;
use crate::app::history::CommandStack;
use crate::core::{build_report, QuantityReport, SessionFlags, Volume, VolumeRegistry};
use crate::shared::options::HISTORY_MAX_DEPTH;
use crate::shared::EditorOptions;

use super::{ActiveSession, EditorToolState, SelectionState};

/// Kompletter Editor-Zustand: explizit besessen, keine prozessweiten
/// Singletons — mehrere unabhängige Instanzen sind möglich.
pub struct AppState {
    /// Alle Volumes der Szene
    pub registry: VolumeRegistry,
    /// Aktuelle Selektion (Teilmenge der Registry-IDs)
    pub selection: SelectionState,
    /// Editor-Modi und Eingabefelder
    pub editor: EditorToolState,
    /// Höchstens eine aktive Editier-Session
    pub session: ActiveSession,
    /// Undo/Redo-Stack (Snapshot-basiert)
    pub history: CommandStack,
    /// Laufzeit-Optionen (Snapping, Defaults)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Mengen-Report, nach jeder Mutation/Selektionsänderung neu aufgebaut
    pub report: QuantityReport,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        let registry = VolumeRegistry::new();
        let selection = SelectionState::new();
        let report = build_report(&registry, &selection.selected_ids, SessionFlags::default());
        Self {
            registry,
            selection,
            editor: EditorToolState::new(),
            session: ActiveSession::Idle,
            history: CommandStack::new_with_capacity(HISTORY_MAX_DEPTH),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            report,
        }
    }

    /// Transiente Flags für den Report (Session-Art, Achsensperre).
    pub fn session_flags(&self) -> SessionFlags {
        let axis_lock = match &self.session {
            ActiveSession::PushPull(s) => s.axis_lock.map(|a| a.as_char()),
            _ => None,
        };
        SessionFlags {
            active_session: self.session.kind().map(|k| k.as_str()),
            axis_lock,
        }
    }

    /// Baut den Mengen-Report neu auf.
    pub fn refresh_report(&mut self) {
        self.report = build_report(
            &self.registry,
            &self.selection.selected_ids,
            self.session_flags(),
        );
    }

    /// Entfernt ein Volume und bereinigt die Selektion.
    pub fn remove_volume(&mut self, id: u64) -> Option<Volume> {
        let removed = self.registry.remove(id);
        if removed.is_some() {
            self.selection.prune(id);
        }
        removed
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
