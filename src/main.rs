//! QS Takeoff Editor — Headless-Demo.
//!
//! Fährt eine geskriptete Editier-Session (Box zeichnen, Wand bauen,
//! Push-Pull, Verschieben, Undo/Redo) über den Controller und gibt den
//! Mengen-Report als JSON aus. Rendering und Raycasting liegen beim Host;
//! die Demo synthetisiert die Pick-Ergebnisse selbst.

use glam::Vec3;

use qs_takeoff_editor::app::{PickResult, PointerModifiers, Ray};
use qs_takeoff_editor::{AppController, AppIntent, AppState, EditorOptions};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "QS Takeoff Editor v{} startet (Headless-Demo)...",
        env!("CARGO_PKG_VERSION")
    );

    let mut state = AppState::new();
    state.options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut controller = AppController::new();

    let mut send = |state: &mut AppState, intent: AppIntent| -> anyhow::Result<()> {
        controller.handle_intent(state, intent)
    };

    // ── Box zeichnen: (0,0) → (5000, -3000) ────────────────────────
    send(&mut state, ground_press(0.0, 0.0))?;
    send(&mut state, ground_move(5000.0, -3000.0))?;
    send(&mut state, ground_press(5000.0, -3000.0))?;

    // ── Wand bauen: Ursprung (10000, 0), 3 m entlang +X ────────────
    send(&mut state, AppIntent::WallModeToggled { enabled: true })?;
    send(&mut state, ground_press(10000.0, 0.0))?;
    send(&mut state, ground_move(13000.0, 0.0))?;
    for _ in 0..3 {
        send(&mut state, AppIntent::ConfirmRequested)?;
    }
    send(&mut state, AppIntent::WallModeToggled { enabled: false })?;

    // ── Push-Pull: +X-Fläche der Box um 1 m herausziehen ───────────
    let box_id = state
        .registry
        .iter()
        .next()
        .map(|v| v.id)
        .ok_or_else(|| anyhow::anyhow!("Demo-Box fehlt"))?;
    send(&mut state, AppIntent::PushPullToggled { enabled: true })?;
    send(
        &mut state,
        AppIntent::PointerPressed {
            pointer_id: 1,
            ray: Ray::new(Vec3::new(5000.0, 1350.0, -1490.0), Vec3::new(0.0, 0.0, -1.0)),
            pick: PickResult::Volume {
                id: box_id,
                point: Vec3::new(5000.0, 1350.0, -1500.0),
                normal: Vec3::X,
            },
            modifiers: PointerModifiers::default(),
        },
    )?;
    send(
        &mut state,
        AppIntent::PointerMoved {
            pointer_id: 1,
            ray: Ray::new(Vec3::new(6000.0, 1350.0, -1490.0), Vec3::new(0.0, 0.0, -1.0)),
            pick: PickResult::None,
            modifiers: PointerModifiers::default(),
        },
    )?;
    send(&mut state, AppIntent::PointerReleased { pointer_id: 1 })?;
    send(&mut state, AppIntent::PushPullToggled { enabled: false })?;

    // ── Verschieben: Box um 2 m nach +Z ────────────────────────────
    send(
        &mut state,
        AppIntent::PointerPressed {
            pointer_id: 1,
            ray: ray_down(3000.0, -1500.0),
            pick: PickResult::Volume {
                id: box_id,
                point: Vec3::new(3000.0, 0.0, -1500.0),
                normal: Vec3::Y,
            },
            modifiers: PointerModifiers::default(),
        },
    )?;
    send(&mut state, ground_move(3000.0, 500.0))?;
    send(&mut state, AppIntent::PointerReleased { pointer_id: 1 })?;

    // ── Undo/Redo einmal quer durch ────────────────────────────────
    send(&mut state, AppIntent::UndoRequested)?;
    send(&mut state, AppIntent::RedoRequested)?;

    println!("{}", serde_json::to_string_pretty(&state.report)?);
    Ok(())
}

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
