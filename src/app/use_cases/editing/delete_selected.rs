//! Use-Case: Selektierte Volumes löschen.

use crate::app::history::{CommandRecord, SnapshotPair};
use crate::app::state::AppState;
use crate::core::Volume;

/// Löscht alle selektierten Volumes als EIN umkehrbares Command.
pub fn delete_selected(state: &mut AppState) {
    if state.selection.selected_ids.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let selection_before = state.selection.ids();
    let snapshots: Vec<Volume> = selection_before
        .iter()
        .filter_map(|id| state.registry.get(*id).cloned())
        .collect();
    if snapshots.is_empty() {
        return;
    }

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

    log::info!("{} Volume(s) gelöscht", count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers;

    #[test]
    fn delete_and_undo_restores_volumes_and_ids() {
        let mut state = AppState::new();
        for x in [0.0f32, 1000.0] {
            let id = state.registry.allocate_id();
            state
                .registry
                .add(Volume::new(id, 200.0, 200.0, 500.0, 0.0, x, 0.0));
            state.selection.selected_ids.insert(id);
        }
        let before: Vec<Volume> = state.registry.iter().cloned().collect();

        delete_selected(&mut state);
        assert!(state.registry.is_empty());
        assert!(state.selection.ids().is_empty());

        handlers::history::undo(&mut state);
        let restored: Vec<Volume> = state.registry.iter().cloned().collect();
        assert_eq!(restored, before);
        assert_eq!(state.selection.ids(), vec![1, 2]);
    }

    #[test]
    fn delete_with_empty_selection_records_nothing() {
        let mut state = AppState::new();
        delete_selected(&mut state);
        assert!(!state.can_undo());
    }
}
