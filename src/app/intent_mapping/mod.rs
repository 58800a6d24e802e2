//! Intent→Command-Mapping: routet Roheingaben zustandsabhängig auf
//! semantische Commands.
//!
//! Hier wird die wechselseitige Exklusivität der Sessions durchgesetzt:
//! Zeiger- und Tasten-Events treiben höchstens eine der Sessions
//! {Zeichnen, Wand, Push-Pull, Verschieben}.


use glam::Vec3;

use super::events::{AppCommand, AppIntent, PickResult, PointerModifiers};
use super::state::{ActiveSession, AppState};
use super::tools::common::{Plane, Ray};
use super::tools::wall::WallStep;
use crate::core::snapping::snap_ground;

/// Übersetzt einen Intent in null oder mehr Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            pointer_id,
            ray,
            pick,
            modifiers,
        } => map_pointer_pressed(state, pointer_id, ray, pick, modifiers),
        AppIntent::PointerMoved {
            ray,
            pick,
            modifiers,
            ..
        } => map_pointer_moved(state, ray, pick, modifiers),
        AppIntent::PointerReleased { pointer_id } => match &state.session {
            ActiveSession::PushPull(s) if s.pointer_id == pointer_id => {
                vec![AppCommand::EndPushPull]
            }
            ActiveSession::Drag(s) if s.pointer_id == pointer_id => vec![AppCommand::EndDrag],
            _ => vec![],
        },
        AppIntent::PointerCancelled { .. } => match &state.session {
            ActiveSession::PushPull(_) => vec![AppCommand::EndPushPull],
            ActiveSession::Drag(_) => vec![AppCommand::EndDrag],
            _ => vec![],
        },

        AppIntent::ConfirmRequested => match &state.session {
            ActiveSession::Wall(_) => vec![AppCommand::ConfirmWallStep],
            ActiveSession::Draw(_) => vec![AppCommand::CommitFootprint],
            _ => vec![AppCommand::ApplyFieldsToSelection],
        },
        AppIntent::CancelRequested => match &state.session {
            // Während Push-Pull hebt Escape nur die Achsensperre auf
            ActiveSession::PushPull(_) => vec![AppCommand::ClearAxisLock],
            ActiveSession::Drag(_) => vec![AppCommand::CancelSession],
            ActiveSession::Idle => vec![AppCommand::ClearSelection],
            _ => vec![AppCommand::CancelSession, AppCommand::ClearSelection],
        },

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::AxisLockToggled { axis } => match &state.session {
            ActiveSession::PushPull(_) => vec![AppCommand::ToggleAxisLock { axis }],
            _ => vec![],
        },

        AppIntent::FieldChanged { field, value } => vec![AppCommand::SetField { field, value }],
        AppIntent::ApplyFieldsRequested => vec![AppCommand::ApplyFieldsToSelection],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],

        AppIntent::WallModeToggled { enabled } => vec![AppCommand::SetWallMode { enabled }],
        AppIntent::PushPullToggled { enabled } => {
            vec![AppCommand::SetPushPullEnabled { enabled }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Bodenpunkt eines Events: Ground-Pick falls vorhanden, sonst der Schnitt
/// des Strahls mit der Bodenebene. Anschließend Raster- + Feature-Snap.
fn snapped_ground_point(state: &AppState, ray: &Ray, pick: &PickResult) -> Option<Vec3> {
    let raw = match pick {
        PickResult::Ground(p) => *p,
        _ => Plane::horizontal(0.0).intersect_ray(ray)?,
    };
    let (x, z) = snap_ground(
        &state.registry,
        raw.x,
        raw.z,
        state.options.grid_step_if_enabled(),
        state.options.feature_snap_radius,
    );
    Some(Vec3::new(x, 0.0, z))
}

fn map_pointer_pressed(
    state: &AppState,
    pointer_id: u64,
    ray: Ray,
    pick: PickResult,
    modifiers: PointerModifiers,
) -> Vec<AppCommand> {
    // Laufende Griff-Sessions schlucken weitere Zeiger-Drücke
    if matches!(
        state.session,
        ActiveSession::PushPull(_) | ActiveSession::Drag(_)
    ) {
        return vec![];
    }

    match pick {
        PickResult::Volume { id, point, normal } => {
            // Push-Pull greift zuerst, außer der Move-Override ist gedrückt
            if state.editor.push_pull_enabled
                && !modifiers.move_override
                && state.session.is_idle()
            {
                return vec![AppCommand::BeginPushPull {
                    id,
                    pointer_id,
                    point,
                    normal,
                    ray,
                }];
            }

            let mut commands = Vec::new();
            if modifiers.secondary_select {
                commands.push(AppCommand::ToggleSelection { id });
                // Nur wenn das Toggle die ID selektiert, beginnt ein Drag
                if !state.selection.contains(id) {
                    commands.push(AppCommand::BeginDrag {
                        id,
                        pointer_id,
                        ray,
                    });
                }
            } else {
                if !state.selection.is_sole_selection(id) {
                    commands.push(AppCommand::SetSingleSelection { id });
                }
                commands.push(AppCommand::BeginDrag {
                    id,
                    pointer_id,
                    ray,
                });
            }
            commands
        }

        PickResult::Ground(_) => match &state.session {
            // Zweiter Klick schließt die laufende Konstruktion ab
            ActiveSession::Draw(_) => match snapped_ground_point(state, &ray, &pick) {
                Some(ground) => vec![
                    AppCommand::UpdateFootprint { ground },
                    AppCommand::CommitFootprint,
                ],
                None => vec![],
            },
            ActiveSession::Wall(_) => vec![AppCommand::CompleteWall],
            ActiveSession::Idle => {
                let mut commands = Vec::new();
                if !modifiers.secondary_select {
                    commands.push(AppCommand::ClearSelection);
                }
                if let Some(origin) = snapped_ground_point(state, &ray, &pick) {
                    commands.push(if state.editor.wall_mode {
                        AppCommand::BeginWall { origin }
                    } else {
                        AppCommand::BeginFootprint { origin }
                    });
                }
                commands
            }
            _ => vec![],
        },

        PickResult::None => {
            if modifiers.secondary_select {
                vec![]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }
    }
}

fn map_pointer_moved(
    state: &AppState,
    ray: Ray,
    pick: PickResult,
    modifiers: PointerModifiers,
) -> Vec<AppCommand> {
    match &state.session {
        ActiveSession::PushPull(_) => vec![AppCommand::UpdatePushPull {
            ray,
            fine_adjust: modifiers.fine_adjust,
        }],
        ActiveSession::Drag(_) => vec![AppCommand::UpdateDrag { ray }],
        ActiveSession::Wall(session) if session.step == WallStep::DefiningU => {
            match snapped_ground_point(state, &ray, &pick) {
                Some(ground) => vec![AppCommand::UpdateWall { ground }],
                None => vec![],
            }
        }
        ActiveSession::Draw(_) => match snapped_ground_point(state, &ray, &pick) {
            Some(ground) => vec![AppCommand::UpdateFootprint { ground }],
            None => vec![],
        },
        _ => vec![],
    }
}
