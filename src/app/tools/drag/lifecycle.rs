//! Lifecycle des Verschiebe-Controllers.

use super::state::DragSession;
use crate::app::history::{CommandRecord, SnapshotPair};
use crate::app::state::{ActiveSession, AppState};
use crate::app::tools::common::{Plane, Ray};
use crate::core::snapping::snap_ground;
use crate::core::Volume;
use glam::Vec3;

/// Startet das Verschieben: horizontale Drag-Ebene auf Basis-Höhe des
/// Ankers, Versatz zum Anker-Zentrum merken, Selektion snapshotten.
pub fn begin(state: &mut AppState, anchor_id: u64, pointer_id: u64, ray: Ray) {
    if !state.session.is_idle() {
        log::debug!("Verschieben nicht gestartet: andere Session aktiv");
        return;
    }
    if !state.selection.contains(anchor_id) {
        return;
    }
    let Some(anchor) = state.registry.get(anchor_id) else {
        return;
    };

    let plane = Plane::horizontal(anchor.base_elevation);
    let Some(hit) = plane.intersect_ray(&ray) else {
        log::debug!("Verschieben nicht gestartet: Strahl parallel zur Ebene");
        return;
    };

    let offset = Vec3::new(anchor.center.x - hit.x, 0.0, anchor.center.z - hit.z);

    let before: Vec<Volume> = state
        .selection
        .ids()
        .iter()
        .filter_map(|id| state.registry.get(*id).cloned())
        .collect();

    state.session = ActiveSession::Drag(DragSession {
        anchor_id,
        pointer_id,
        plane,
        offset,
        before,
    });

    log::info!("Verschieben gestartet (Anker {})", anchor_id);
}

/// Verschiebt die gesamte Selektion um das inkrementelle Delta des Ankers.
/// Zielpunkt durchläuft Raster- und Feature-Snap; die Vertikale wird immer
/// aus `base_elevation + height/2` abgeleitet.
pub fn update(state: &mut AppState, ray: Ray) {
    let grid_step = state.options.grid_step_if_enabled();
    let feature_radius = state.options.feature_snap_radius;

    let ActiveSession::Drag(session) = &state.session else {
        return;
    };
    let Some(hit) = session.plane.intersect_ray(&ray) else {
        return;
    };

    let target_x = hit.x + session.offset.x;
    let target_z = hit.z + session.offset.z;
    let (target_x, target_z) = snap_ground(
        &state.registry,
        target_x,
        target_z,
        grid_step,
        feature_radius,
    );

    let Some(anchor) = state.registry.get(session.anchor_id) else {
        return;
    };
    let dx = target_x - anchor.center.x;
    let dz = target_z - anchor.center.z;

    for id in state.selection.ids() {
        state.registry.update(id, |volume| {
            volume.center.x += dx;
            volume.center.z += dz;
            volume.resync_center_height();
        });
    }
}

/// Beendet das Verschieben; hat sich irgendein Volume bewegt, wird EIN
/// Command über die komplette Snapshot-Liste aufgezeichnet.
pub fn end(state: &mut AppState) {
    if !matches!(state.session, ActiveSession::Drag(_)) {
        log::debug!("Kein Verschiebe-Ende: keine Session aktiv");
        return;
    }
    let ActiveSession::Drag(session) = std::mem::take(&mut state.session) else {
        unreachable!()
    };

    let pairs: Vec<SnapshotPair> = session
        .before
        .into_iter()
        .filter_map(|before| {
            let after = state.registry.get(before.id).cloned()?;
            Some(SnapshotPair::updated(before, after))
        })
        .collect();

    let moved = pairs.iter().any(|pair| pair.before != pair.after);
    if moved {
        let selection = state.selection.ids();
        state.history.record(CommandRecord {
            volumes: pairs,
            selection_before: selection.clone(),
            selection_after: selection,
        });
    }
    log::info!("Verschieben beendet (bewegt: {})", moved);
}

/// Bricht das Verschieben ab: alle Snapshots wiederherstellen, kein Command.
pub fn cancel(state: &mut AppState) {
    let ActiveSession::Drag(session) = std::mem::take(&mut state.session) else {
        return;
    };
    for volume in session.before {
        state.registry.restore(volume);
    }
    log::info!("Verschieben abgebrochen");
}
