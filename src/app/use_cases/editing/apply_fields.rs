//! Use-Case: Seitenpanel-Werte gesammelt auf die Selektion anwenden.

use crate::app::history::{CommandRecord, SnapshotPair};
use crate::app::state::AppState;
use crate::shared::options::MIN_HORIZONTAL_EXTENT;

/// Wendet Länge/Breite/Höhe/Basis-Höhe aus dem Seitenpanel auf jedes
/// selektierte Volume an (horizontal mindestens 1, Höhe mindestens 0).
/// Position in der Ebene bleibt erhalten, die Vertikale wird neu abgeleitet.
pub fn apply_fields_to_selection(state: &mut AppState) {
    let ids = state.selection.ids();
    if ids.is_empty() {
        log::debug!("Sammel-Anwendung: keine Selektion");
        return;
    }

    let fields = state.editor.fields;
    let length = fields.panel_length.unwrap_or(1.0).max(MIN_HORIZONTAL_EXTENT);
    let width = fields.panel_width.unwrap_or(1.0).max(MIN_HORIZONTAL_EXTENT);
    let height = fields.panel_height.unwrap_or(0.0).max(0.0);
    let base_elevation = fields.panel_base.unwrap_or(0.0);

    let mut pairs = Vec::with_capacity(ids.len());
    for id in &ids {
        let Some(before) = state.registry.get(*id).cloned() else {
            continue;
        };
        state.registry.update(*id, |volume| {
            volume.length = length;
            volume.width = width;
            volume.height = height;
            volume.base_elevation = base_elevation;
            volume.resync_center_height();
        });
        let after = state
            .registry
            .get(*id)
            .cloned()
            .unwrap_or_else(|| before.clone());
        pairs.push(SnapshotPair::updated(before, after));
    }

    if pairs.iter().any(|pair| pair.before != pair.after) {
        state.history.record(CommandRecord {
            volumes: pairs,
            selection_before: ids.clone(),
            selection_after: ids.clone(),
        });
    }

    log::info!(
        "Panel-Werte auf {} Volume(s) angewendet ({:.0} × {:.0} × {:.0})",
        ids.len(),
        length,
        width,
        height
    );
}
