use glam::Vec3;

use super::lifecycle;
use crate::app::handlers;
use crate::app::state::{ActiveSession, AppState};
use crate::app::tools::common::{Axis, Ray};
use crate::core::Volume;

/// Würfel 1000³ mit Basis auf 0, Zentrum (0, 500, 0).
fn state_with_cube() -> (AppState, u64) {
    let mut state = AppState::new();
    state.editor.push_pull_enabled = true;
    state.options.grid_snap_enabled = false;
    let id = state.registry.allocate_id();
    state
        .registry
        .add(Volume::new(id, 1000.0, 1000.0, 1000.0, 0.0, 0.0, 0.0));
    (state, id)
}

/// Betrachter blickt entlang −Z; die Drag-Ebene liegt damit bei z = Treffpunkt.
fn viewer_ray(origin: Vec3) -> Ray {
    Ray::new(origin, Vec3::new(0.0, 0.0, -1.0))
}

fn begin_on_pos_x_face(state: &mut AppState, id: u64) {
    let hit = Vec3::new(500.0, 500.0, 0.0);
    lifecycle::begin(
        state,
        id,
        1,
        hit,
        Vec3::X,
        viewer_ray(Vec3::new(500.0, 500.0, 10.0)),
    );
}

#[test]
fn test_begin_selects_target_and_opens_session() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);

    assert!(matches!(state.session, ActiveSession::PushPull(_)));
    assert_eq!(state.selection.ids(), vec![id]);
}

#[test]
fn test_begin_refused_when_disabled_or_busy() {
    let (mut state, id) = state_with_cube();
    state.editor.push_pull_enabled = false;
    begin_on_pos_x_face(&mut state, id);
    assert!(state.session.is_idle());

    state.editor.push_pull_enabled = true;
    begin_on_pos_x_face(&mut state, id);
    let before = state.session.clone();
    begin_on_pos_x_face(&mut state, id);
    assert_eq!(state.session, before);
}

#[test]
fn test_pull_pos_x_face_keeps_opposite_face_fixed() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);

    // Zeiger 500 mm in +X: Fläche folgt, Gegenfläche bleibt bei −500
    lifecycle::update(
        &mut state,
        viewer_ray(Vec3::new(1000.0, 500.0, 10.0)),
        false,
    );

    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.length, 1500.0);
    assert_eq!(volume.width, 1000.0);
    assert_eq!(volume.height, 1000.0);
    assert_eq!(volume.center, Vec3::new(250.0, 500.0, 0.0));
    assert_eq!(volume.center.x - volume.half_length(), -500.0);
    assert_eq!(volume.base_elevation, 0.0);
}

#[test]
fn test_vertical_pull_rederives_base_elevation() {
    let (mut state, id) = state_with_cube();
    let hit = Vec3::new(0.0, 1000.0, 0.0);
    lifecycle::begin(
        &mut state,
        id,
        1,
        hit,
        Vec3::Y,
        viewer_ray(Vec3::new(0.0, 1000.0, 10.0)),
    );
    lifecycle::update(&mut state, viewer_ray(Vec3::new(0.0, 1600.0, 10.0)), false);

    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.height, 1600.0);
    // Unterseite bleibt weltfest
    assert_eq!(volume.base_elevation, 0.0);
    assert_eq!(volume.center.y, 800.0);
}

#[test]
fn test_vertical_push_clamps_height_at_zero() {
    let (mut state, id) = state_with_cube();
    let hit = Vec3::new(0.0, 1000.0, 0.0);
    lifecycle::begin(
        &mut state,
        id,
        1,
        hit,
        Vec3::Y,
        viewer_ray(Vec3::new(0.0, 1000.0, 10.0)),
    );
    lifecycle::update(&mut state, viewer_ray(Vec3::new(0.0, -500.0, 10.0)), false);

    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.height, 0.0);
    assert_eq!(volume.base_elevation, 0.0);
}

#[test]
fn test_horizontal_push_clamps_at_minimum_extent() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);
    lifecycle::update(
        &mut state,
        viewer_ray(Vec3::new(-2000.0, 500.0, 10.0)),
        false,
    );

    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.length, 1.0);
    // Gegenfläche unverändert bei −500
    assert_eq!(volume.center.x - volume.half_length(), -500.0);
}

#[test]
fn test_fine_adjust_scales_delta() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);
    lifecycle::update(
        &mut state,
        viewer_ray(Vec3::new(900.0, 500.0, 10.0)),
        true,
    );

    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.length, 1100.0);
}

#[test]
fn test_grid_snap_rounds_delta() {
    let (mut state, id) = state_with_cube();
    state.options.grid_snap_enabled = true;
    state.options.grid_step = 100.0;
    begin_on_pos_x_face(&mut state, id);
    lifecycle::update(
        &mut state,
        viewer_ray(Vec3::new(949.0, 500.0, 10.0)),
        false,
    );

    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.length, 1400.0);
}

#[test]
fn test_axis_lock_redirects_and_toggles() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);

    lifecycle::toggle_axis_lock(&mut state, Axis::Y);
    // Zeiger in +Y hebt jetzt die Höhe an, X bleibt unverändert
    lifecycle::update(&mut state, viewer_ray(Vec3::new(500.0, 900.0, 10.0)), false);
    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.length, 1000.0);
    assert_eq!(volume.height, 1400.0);

    // Gleiche Taste erneut: Sperre aufgehoben
    lifecycle::toggle_axis_lock(&mut state, Axis::Y);
    let ActiveSession::PushPull(session) = &state.session else {
        panic!("Push-Pull-Session erwartet");
    };
    assert_eq!(session.axis_lock, None);
}

#[test]
fn test_clear_axis_lock_keeps_session() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);
    lifecycle::toggle_axis_lock(&mut state, Axis::Z);
    lifecycle::clear_axis_lock(&mut state);

    let ActiveSession::PushPull(session) = &state.session else {
        panic!("Push-Pull-Session erwartet");
    };
    assert_eq!(session.axis_lock, None);
}

#[test]
fn test_parallel_ray_is_noop() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);
    // Strahl liegt in der Drag-Ebene (senkrecht zur Ebenen-Normale −Z)
    lifecycle::update(
        &mut state,
        Ray::new(Vec3::new(2000.0, 500.0, 0.0), Vec3::X),
        false,
    );

    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.length, 1000.0);
}

#[test]
fn test_end_records_single_undoable_update() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);
    lifecycle::update(
        &mut state,
        viewer_ray(Vec3::new(1000.0, 500.0, 10.0)),
        false,
    );
    lifecycle::end(&mut state);

    assert!(state.session.is_idle());
    assert!(state.can_undo());

    handlers::history::undo(&mut state);
    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.length, 1000.0);
    assert_eq!(volume.center, Vec3::new(0.0, 500.0, 0.0));
}

#[test]
fn test_end_without_change_records_nothing() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);
    lifecycle::end(&mut state);

    assert!(!state.can_undo());
    assert!(state.registry.contains(id));
}

#[test]
fn test_cancel_restores_start_state() {
    let (mut state, id) = state_with_cube();
    begin_on_pos_x_face(&mut state, id);
    lifecycle::update(
        &mut state,
        viewer_ray(Vec3::new(1000.0, 500.0, 10.0)),
        false,
    );
    lifecycle::cancel(&mut state);

    let volume = state.registry.get(id).expect("vorhanden");
    assert_eq!(volume.length, 1000.0);
    assert!(!state.can_undo());
}
