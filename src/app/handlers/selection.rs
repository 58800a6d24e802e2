//! Handler für Selektionsänderungen.

use crate::app::state::AppState;
use crate::app::tools::wall;
use crate::app::use_cases;

/// Einzelauswahl; im Wand-Modus armiert die Auswahl einer Wand den
/// Bearbeitungsmodus (sofern keine Session läuft).
pub fn set_single(state: &mut AppState, id: u64) {
    use_cases::selection::set_single(state, id);
    if state.editor.wall_mode && state.session.is_idle() {
        wall::lifecycle::enter_edit(state, id);
    }
}

/// Sekundär-Selektion: ID umschalten.
pub fn toggle(state: &mut AppState, id: u64) {
    use_cases::selection::toggle(state, id);
}

/// Selektion aufheben.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear(state);
}
