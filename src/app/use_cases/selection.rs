//! Use-Case: Selektion setzen, umschalten, leeren.

use crate::app::state::AppState;

/// Ersetzt die Selektion durch genau diese ID.
pub fn set_single(state: &mut AppState, id: u64) {
    if !state.registry.contains(id) {
        log::debug!("Selektion unverändert: Volume {} unbekannt", id);
        return;
    }
    state.selection.set_ids(&[id]);
    log::debug!("Volume {} selektiert", id);
}

/// Schaltet die ID in der Selektion um (Sekundär-Selektion).
pub fn toggle(state: &mut AppState, id: u64) {
    if state.selection.contains(id) {
        state.selection.prune(id);
        log::debug!("Volume {} abgewählt", id);
    } else if state.registry.contains(id) {
        state.selection.selected_ids.insert(id);
        log::debug!("Volume {} zur Selektion hinzugefügt", id);
    }
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    if state.selection.selected_ids.is_empty() {
        return;
    }
    state.selection.selected_ids.clear();
    log::debug!("Selektion aufgehoben");
}
