//! Lifecycle des Push-Pull-Flächeneditors.

use glam::Vec3;

use super::state::PushPullSession;
use crate::app::history::{CommandRecord, SnapshotPair};
use crate::app::state::{ActiveSession, AppState};
use crate::app::tools::common::{axis_from_normal, locked_axis_vector, Axis, Plane, Ray};
use crate::app::use_cases;
use crate::core::snapping::snap_value;
use crate::shared::options::{FINE_ADJUST_FACTOR, MIN_HORIZONTAL_EXTENT};

/// Greift eine Volume-Fläche: Normale auf Hauptachse rasten, Drag-Ebene
/// zum Betrachter durch den Treffpunkt legen, Startzustand sichern.
pub fn begin(
    state: &mut AppState,
    id: u64,
    pointer_id: u64,
    point: Vec3,
    normal: Vec3,
    ray: Ray,
) {
    if !state.editor.push_pull_enabled {
        return;
    }
    if !state.session.is_idle() {
        log::debug!("Push-Pull nicht gestartet: andere Session aktiv");
        return;
    }
    let Some(volume) = state.registry.get(id).cloned() else {
        return;
    };

    // Zielvolume wird alleinige Selektion
    let selection_before = state.selection.ids();
    if !state.selection.is_sole_selection(id) {
        use_cases::selection::set_single(state, id);
    }

    let clicked_axis = axis_from_normal(normal);
    let drag_plane = Plane::from_normal_and_point(ray.direction.normalize(), point);

    state.session = ActiveSession::PushPull(PushPullSession {
        target_id: id,
        pointer_id,
        clicked_axis,
        drag_plane,
        start_point: point,
        start_extents: volume.extents(),
        start_center: volume.center,
        axis_lock: None,
        before: volume,
        selection_before,
    });

    log::info!(
        "Push-Pull gestartet auf Volume {} (Achse {:+.0}/{:+.0}/{:+.0})",
        id,
        clicked_axis.x,
        clicked_axis.y,
        clicked_axis.z
    );
}

/// Zieht die gegriffene Fläche entlang der aktiven Achse; die Gegenfläche
/// bleibt weltfest. Paralleler Strahl zur Drag-Ebene ist ein No-op.
pub fn update(state: &mut AppState, ray: Ray, fine_adjust: bool) {
    let grid_step = state.options.grid_step_if_enabled();
    let ActiveSession::PushPull(session) = &state.session else {
        return;
    };

    let Some(projected) = session.drag_plane.intersect_ray(&ray) else {
        return;
    };

    let axis_vec = locked_axis_vector(session.axis_lock, session.clicked_axis);
    let mut delta = (projected - session.start_point).dot(axis_vec);

    if fine_adjust {
        delta *= FINE_ADJUST_FACTOR;
    }
    if let Some(step) = grid_step {
        delta = snap_value(delta, step);
    }

    let axis = if axis_vec.x != 0.0 {
        Axis::X
    } else if axis_vec.y != 0.0 {
        Axis::Y
    } else {
        Axis::Z
    };

    let start_size = match axis {
        Axis::X => session.start_extents.x,
        Axis::Y => session.start_extents.y,
        Axis::Z => session.start_extents.z,
    };
    let minimum = if axis.is_vertical() {
        0.0
    } else {
        MIN_HORIZONTAL_EXTENT
    };
    let new_size = (start_size + delta).max(minimum);

    // Gegenfläche fixieren: opp = startCenter − Achse·(startGröße/2)
    let opposite = session.start_center - axis_vec * (start_size / 2.0);
    let new_center = opposite + axis_vec * (new_size / 2.0);

    let target_id = session.target_id;
    state.registry.update(target_id, |volume| {
        match axis {
            Axis::X => volume.length = new_size,
            Axis::Y => volume.height = new_size,
            Axis::Z => volume.width = new_size,
        }
        volume.center = new_center;
        // Vertikale Bearbeitung verschiebt die Basis; horizontale nie
        if axis.is_vertical() {
            volume.base_elevation = new_center.y - new_size / 2.0;
        }
    });
}

/// Beendet die Session; bei tatsächlicher Änderung wird ein
/// Update-Command aufgezeichnet.
pub fn end(state: &mut AppState) {
    if !matches!(state.session, ActiveSession::PushPull(_)) {
        log::debug!("Kein Push-Pull-Ende: keine Session aktiv");
        return;
    }
    let ActiveSession::PushPull(session) = std::mem::take(&mut state.session) else {
        unreachable!()
    };

    let Some(after) = state.registry.get(session.target_id).cloned() else {
        return;
    };

    if session.before != after {
        state.history.record(CommandRecord {
            volumes: vec![SnapshotPair::updated(session.before, after)],
            selection_before: session.selection_before,
            selection_after: state.selection.ids(),
        });
    }
    log::info!("Push-Pull beendet auf Volume {}", session.target_id);
}

/// Bricht die Session ab: Startzustand wiederherstellen, kein Command.
pub fn cancel(state: &mut AppState) {
    let ActiveSession::PushPull(session) = std::mem::take(&mut state.session) else {
        return;
    };
    state.registry.restore(session.before);
    log::info!("Push-Pull abgebrochen auf Volume {}", session.target_id);
}

/// Schaltet die Achsensperre um; dieselbe Taste erneut hebt sie auf.
/// Nur während einer aktiven Push-Pull-Session gültig.
pub fn toggle_axis_lock(state: &mut AppState, axis: Axis) {
    let ActiveSession::PushPull(session) = &mut state.session else {
        return;
    };
    session.axis_lock = if session.axis_lock == Some(axis) {
        None
    } else {
        Some(axis)
    };
    log::info!("Achsensperre: {:?}", session.axis_lock.map(|a| a.as_char()));
}

/// Hebt die Achsensperre auf, ohne die Session zu beenden.
pub fn clear_axis_lock(state: &mut AppState) {
    if let ActiveSession::PushPull(session) = &mut state.session {
        session.axis_lock = None;
        log::info!("Achsensperre aufgehoben");
    }
}
