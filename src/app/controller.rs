//! Application Controller für zentrale Event-Verarbeitung.

use super::{handlers, intent_mapping, render_scene};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Intents und Commands auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus und baut danach den
    /// Mengen-Report neu auf. Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());

        match command {
            // === Selektion ===
            AppCommand::SetSingleSelection { id } => handlers::selection::set_single(state, id),
            AppCommand::ToggleSelection { id } => handlers::selection::toggle(state, id),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Footprint-Zeichnen ===
            AppCommand::BeginFootprint { origin } => {
                handlers::session::begin_footprint(state, origin)
            }
            AppCommand::UpdateFootprint { ground } => {
                handlers::session::update_footprint(state, ground)
            }
            AppCommand::CommitFootprint => handlers::session::commit_footprint(state),

            // === Wand-Builder ===
            AppCommand::BeginWall { origin } => handlers::session::begin_wall(state, origin),
            AppCommand::UpdateWall { ground } => handlers::session::update_wall(state, ground),
            AppCommand::ConfirmWallStep => handlers::session::confirm_wall_step(state),
            AppCommand::CompleteWall => handlers::session::complete_wall(state),

            // === Push-Pull ===
            AppCommand::BeginPushPull {
                id,
                pointer_id,
                point,
                normal,
                ray,
            } => handlers::session::begin_push_pull(state, id, pointer_id, point, normal, ray),
            AppCommand::UpdatePushPull { ray, fine_adjust } => {
                handlers::session::update_push_pull(state, ray, fine_adjust)
            }
            AppCommand::EndPushPull => handlers::session::end_push_pull(state),
            AppCommand::ToggleAxisLock { axis } => {
                handlers::session::toggle_axis_lock(state, axis)
            }
            AppCommand::ClearAxisLock => handlers::session::clear_axis_lock(state),

            // === Verschieben ===
            AppCommand::BeginDrag {
                id,
                pointer_id,
                ray,
            } => handlers::session::begin_drag(state, id, pointer_id, ray),
            AppCommand::UpdateDrag { ray } => handlers::session::update_drag(state, ray),
            AppCommand::EndDrag => handlers::session::end_drag(state),

            // === Session-Steuerung ===
            AppCommand::CancelSession => handlers::session::cancel_active(state),

            // === Editing ===
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::ApplyFieldsToSelection => handlers::editing::apply_fields(state),
            AppCommand::ClearAll => handlers::editing::clear_all(state),
            AppCommand::SetField { field, value } => {
                handlers::editing::set_field(state, field, value)
            }

            // === Modi & Optionen ===
            AppCommand::SetWallMode { enabled } => handlers::editing::set_wall_mode(state, enabled),
            AppCommand::SetPushPullEnabled { enabled } => {
                handlers::editing::set_push_pull_enabled(state, enabled)
            }
            AppCommand::ApplyOptions { options } => {
                handlers::editing::apply_options(state, options)?
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        state.refresh_report();
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::{PickResult, PointerModifiers};
    use crate::app::tools::common::Ray;
    use crate::core::Volume;
    use glam::Vec3;

    fn ray_down(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 10000.0, z), Vec3::new(0.0, -1.0, 0.0))
    }

    fn ground_press(x: f32, z: f32) -> AppIntent {
        AppIntent::PointerPressed {
            pointer_id: 1,
            ray: ray_down(x, z),
            pick: PickResult::Ground(Vec3::new(x, 0.0, z)),
            modifiers: PointerModifiers::default(),
        }
    }

    fn ground_move(x: f32, z: f32) -> AppIntent {
        AppIntent::PointerMoved {
            pointer_id: 1,
            ray: ray_down(x, z),
            pick: PickResult::Ground(Vec3::new(x, 0.0, z)),
            modifiers: PointerModifiers::default(),
        }
    }

    fn handle(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
        controller
            .handle_intent(state, intent)
            .expect("Intent verarbeitbar");
    }

    fn snapshot(state: &AppState) -> (Vec<Volume>, Vec<u64>) {
        (
            state.registry.iter().cloned().collect(),
            state.selection.ids(),
        )
    }

    /// Kompletter Editier-Durchlauf: Zeichnen, Wand, Push-Pull, Verschieben,
    /// Löschen — N Undos stellen exakt den Ausgangszustand wieder her,
    /// N Redos exakt den Endzustand.
    #[test]
    fn test_undo_redo_roundtrip_over_full_session() {
        let mut controller = AppController::new();
        let mut state = AppState::new();

        // 1. Box zeichnen: (0,0) → (500, -300)
        handle(&mut controller, &mut state, ground_press(0.0, 0.0));
        handle(&mut controller, &mut state, ground_move(500.0, -300.0));
        handle(&mut controller, &mut state, ground_press(500.0, -300.0));
        let box_id = state.registry.iter().next().expect("Box vorhanden").id;

        // 2. Wand bauen: Ursprung (10000, 10000), U = 3000 entlang +X
        handle(
            &mut controller,
            &mut state,
            AppIntent::WallModeToggled { enabled: true },
        );
        handle(&mut controller, &mut state, ground_press(10000.0, 10000.0));
        handle(&mut controller, &mut state, ground_move(13000.0, 10000.0));
        for _ in 0..3 {
            handle(&mut controller, &mut state, AppIntent::ConfirmRequested);
        }
        handle(
            &mut controller,
            &mut state,
            AppIntent::WallModeToggled { enabled: false },
        );
        assert_eq!(state.registry.len(), 2);

        // 3. Push-Pull: +X-Fläche der Box um 200 ziehen
        handle(
            &mut controller,
            &mut state,
            AppIntent::PushPullToggled { enabled: true },
        );
        let face_ray = Ray::new(Vec3::new(500.0, 1350.0, -140.0), Vec3::new(0.0, 0.0, -1.0));
        handle(
            &mut controller,
            &mut state,
            AppIntent::PointerPressed {
                pointer_id: 1,
                ray: face_ray,
                pick: PickResult::Volume {
                    id: box_id,
                    point: Vec3::new(500.0, 1350.0, -150.0),
                    normal: Vec3::X,
                },
                modifiers: PointerModifiers::default(),
            },
        );
        handle(
            &mut controller,
            &mut state,
            AppIntent::PointerMoved {
                pointer_id: 1,
                ray: Ray::new(Vec3::new(700.0, 1350.0, -140.0), Vec3::new(0.0, 0.0, -1.0)),
                pick: PickResult::None,
                modifiers: PointerModifiers::default(),
            },
        );
        handle(
            &mut controller,
            &mut state,
            AppIntent::PointerReleased { pointer_id: 1 },
        );
        handle(
            &mut controller,
            &mut state,
            AppIntent::PushPullToggled { enabled: false },
        );
        assert_eq!(
            state.registry.get(box_id).expect("Box vorhanden").length,
            700.0
        );

        // 4. Verschieben: Box um 1000 in +X
        handle(
            &mut controller,
            &mut state,
            AppIntent::PointerPressed {
                pointer_id: 1,
                ray: ray_down(0.0, 0.0),
                pick: PickResult::Volume {
                    id: box_id,
                    point: Vec3::new(350.0, 1350.0, -150.0),
                    normal: Vec3::X,
                },
                modifiers: PointerModifiers::default(),
            },
        );
        handle(&mut controller, &mut state, ground_move(1000.0, 0.0));
        handle(
            &mut controller,
            &mut state,
            AppIntent::PointerReleased { pointer_id: 1 },
        );

        // 5. Löschen der Box
        handle(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
        assert_eq!(state.registry.len(), 1);

        let final_state = snapshot(&state);

        // N-faches Undo stellt den leeren Ausgangszustand her
        let mut undo_count = 0;
        while state.can_undo() {
            handle(&mut controller, &mut state, AppIntent::UndoRequested);
            undo_count += 1;
        }
        assert_eq!(undo_count, 5);
        assert!(state.registry.is_empty());
        assert!(state.selection.ids().is_empty());

        // N-faches Redo stellt den Endzustand bitgleich her
        for _ in 0..undo_count {
            handle(&mut controller, &mut state, AppIntent::RedoRequested);
        }
        assert_eq!(snapshot(&state), final_state);
    }

    #[test]
    fn test_report_refreshes_after_commands() {
        let mut controller = AppController::new();
        let mut state = AppState::new();

        handle(&mut controller, &mut state, ground_press(0.0, 0.0));
        assert_eq!(state.report.session.active_session, Some("draw"));

        handle(&mut controller, &mut state, ground_move(500.0, -300.0));
        handle(&mut controller, &mut state, ground_press(500.0, -300.0));
        assert_eq!(state.report.session.active_session, None);
        assert_eq!(state.report.count, 1);
        assert_eq!(state.report.selected_count, 1);
        assert_eq!(
            state.report.totals_all.volume,
            500.0 * 300.0 * 2700.0
        );
    }

    #[test]
    fn test_undo_on_empty_stack_is_total() {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        handle(&mut controller, &mut state, AppIntent::UndoRequested);
        handle(&mut controller, &mut state, AppIntent::RedoRequested);
        assert!(state.registry.is_empty());
    }
}
