//! Handler für Undo/Redo-Operationen.

use crate::app::history::{apply_side, Side};
use crate::app::state::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Während der Wiederherstellung ist die Command-Aufzeichnung über das
/// Replay-Flag des Stacks unterdrückt.
pub fn undo(state: &mut AppState) {
    let Some(record) = state.history.pop_undo() else {
        log::debug!("Undo: nichts zu tun");
        return;
    };

    state.history.begin_replay();
    apply_side(
        &mut state.registry,
        &mut state.selection,
        &record,
        Side::Before,
    );
    state.history.end_replay();

    state.history.stash_undone(record);
    log::info!("Undo ausgeführt");
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let Some(record) = state.history.pop_redo() else {
        log::debug!("Redo: nichts zu tun");
        return;
    };

    state.history.begin_replay();
    apply_side(
        &mut state.registry,
        &mut state.selection,
        &record,
        Side::After,
    );
    state.history.end_replay();

    state.history.stash_redone(record);
    log::info!("Redo ausgeführt");
}
