//! Handler für Session-Lifecycle (Zeichnen, Wand, Push-Pull, Verschieben).

use glam::Vec3;

use crate::app::state::{ActiveSession, AppState};
use crate::app::tools::common::{Axis, Ray};
use crate::app::tools::{drag, footprint, push_pull, wall};

pub fn begin_footprint(state: &mut AppState, origin: Vec3) {
    footprint::lifecycle::begin(state, origin);
}

pub fn update_footprint(state: &mut AppState, ground: Vec3) {
    footprint::lifecycle::update(state, ground);
}

pub fn commit_footprint(state: &mut AppState) {
    footprint::lifecycle::commit(state);
}

pub fn begin_wall(state: &mut AppState, origin: Vec3) {
    wall::lifecycle::begin(state, origin);
}

pub fn update_wall(state: &mut AppState, ground: Vec3) {
    wall::lifecycle::update(state, ground);
}

pub fn confirm_wall_step(state: &mut AppState) {
    wall::lifecycle::confirm_step(state);
}

pub fn complete_wall(state: &mut AppState) {
    wall::lifecycle::complete(state);
}

pub fn begin_push_pull(
    state: &mut AppState,
    id: u64,
    pointer_id: u64,
    point: Vec3,
    normal: Vec3,
    ray: Ray,
) {
    push_pull::lifecycle::begin(state, id, pointer_id, point, normal, ray);
}

pub fn update_push_pull(state: &mut AppState, ray: Ray, fine_adjust: bool) {
    push_pull::lifecycle::update(state, ray, fine_adjust);
}

pub fn end_push_pull(state: &mut AppState) {
    push_pull::lifecycle::end(state);
}

pub fn toggle_axis_lock(state: &mut AppState, axis: Axis) {
    push_pull::lifecycle::toggle_axis_lock(state, axis);
}

pub fn clear_axis_lock(state: &mut AppState) {
    push_pull::lifecycle::clear_axis_lock(state);
}

pub fn begin_drag(state: &mut AppState, id: u64, pointer_id: u64, ray: Ray) {
    drag::lifecycle::begin(state, id, pointer_id, ray);
}

pub fn update_drag(state: &mut AppState, ray: Ray) {
    drag::lifecycle::update(state, ray);
}

pub fn end_drag(state: &mut AppState) {
    drag::lifecycle::end(state);
}

/// Bricht die aktive Session ab — ohne Command und ohne Netto-Effekt auf
/// die Registry. Zeichnen/Wand werden verworfen; Push-Pull und Verschieben
/// stellen ihre Vorher-Snapshots wieder her.
pub fn cancel_active(state: &mut AppState) {
    match &state.session {
        ActiveSession::Idle => {}
        ActiveSession::Draw(_) => {
            state.session = ActiveSession::Idle;
            log::info!("Zeichnen abgebrochen");
        }
        ActiveSession::Wall(_) => {
            state.session = ActiveSession::Idle;
            log::info!("Wand-Konstruktion abgebrochen");
        }
        ActiveSession::PushPull(_) => push_pull::lifecycle::cancel(state),
        ActiveSession::Drag(_) => drag::lifecycle::cancel(state),
    }
    state.editor.fields.clear_entries();
}
