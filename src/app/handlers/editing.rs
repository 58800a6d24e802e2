//! Handler für Editing-Operationen, Felder und Modus-Wechsel.

use super::session;
use crate::app::state::{ActiveSession, AppState, FieldId};
use crate::app::tools::{footprint, wall};
use crate::app::use_cases;
use crate::shared::EditorOptions;

/// Selektierte Volumes löschen.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Seitenpanel-Werte auf die Selektion anwenden.
pub fn apply_fields(state: &mut AppState) {
    use_cases::editing::apply_fields_to_selection(state);
}

/// Alle Volumes entfernen (laufende Session vorher abbrechen).
pub fn clear_all(state: &mut AppState) {
    session::cancel_active(state);
    use_cases::editing::clear_all(state);
}

/// Feldwert übernehmen und die laufende Session live nachziehen.
pub fn set_field(state: &mut AppState, field: FieldId, value: Option<f32>) {
    state.editor.fields.set(field, value);

    // Panel-Felder zählen im Zeichnen erst als Override, wenn der Operator
    // sie in dieser Session beschrieben hat; Leeren hebt das wieder auf.
    if let ActiveSession::Draw(draw) = &mut state.session {
        match field {
            FieldId::PanelLength => draw.panel_length_manual = value.is_some(),
            FieldId::PanelWidth => draw.panel_width_manual = value.is_some(),
            _ => {}
        }
    }

    match state.session {
        ActiveSession::Draw(_) => footprint::lifecycle::refresh(state),
        ActiveSession::Wall(_) => wall::lifecycle::refresh_from_fields(state),
        _ => {}
    }
}

/// Wand-Modus umschalten; Abschalten bricht eine laufende Wand-Session ab.
pub fn set_wall_mode(state: &mut AppState, enabled: bool) {
    state.editor.wall_mode = enabled;
    if !enabled && matches!(state.session, ActiveSession::Wall(_)) {
        session::cancel_active(state);
    }
    log::info!("Wand-Modus: {}", enabled);
}

/// Push-Pull umschalten; Abschalten bricht eine laufende Session ab.
pub fn set_push_pull_enabled(state: &mut AppState, enabled: bool) {
    state.editor.push_pull_enabled = enabled;
    if !enabled && matches!(state.session, ActiveSession::PushPull(_)) {
        session::cancel_active(state);
    }
    log::info!("Push-Pull: {}", enabled);
}

/// Optionen sofort übernehmen und neben der Binary persistieren.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&EditorOptions::config_path())?;
    log::info!("Optionen übernommen");
    Ok(())
}
