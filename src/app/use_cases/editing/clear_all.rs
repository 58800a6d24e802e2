//! Use-Case: Alle Volumes entfernen.

use crate::app::history::{CommandRecord, SnapshotPair};
use crate::app::state::AppState;
use crate::core::Volume;

/// Entfernt jedes Volume und die Selektion als EIN umkehrbares Command.
pub fn clear_all(state: &mut AppState) {
    if state.registry.is_empty() {
        log::debug!("Nichts zu leeren");
        return;
    }

    let selection_before = state.selection.ids();
    let snapshots: Vec<Volume> = state.registry.iter().cloned().collect();

    for volume in &snapshots {
        state.remove_volume(volume.id);
    }
    state.selection.selected_ids.clear();

    let count = snapshots.len();
    state.history.record(CommandRecord {
        volumes: snapshots.into_iter().map(SnapshotPair::removed).collect(),
        selection_before,
        selection_after: vec![],
    });

    log::info!("Szene geleert ({} Volume(s))", count);
}
