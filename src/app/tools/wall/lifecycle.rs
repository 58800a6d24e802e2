//! Lifecycle des Wand-Builders: Schrittmaschine U → V → W.

use glam::Vec3;

use super::geometry::{derive_origin, perpendicular_w, u_direction_of, wall_volume};
use super::state::{WallAxis, WallSession, WallStep};
use crate::app::history::{CommandRecord, SnapshotPair};
use crate::app::state::{ActiveSession, AppState, DimensionFields};
use crate::app::tools::common::{direction_from_angle_deg, snap_angle};

/// Startet eine Wand-Session am (bereits gesnappten) Bodenpunkt.
pub fn begin(state: &mut AppState, origin: Vec3) {
    if !state.session.is_idle() {
        log::debug!("Wand-Builder nicht gestartet: andere Session aktiv");
        return;
    }
    if !state.editor.wall_mode {
        log::debug!("Wand-Builder nicht gestartet: Wand-Modus inaktiv");
        return;
    }
    state.session = ActiveSession::Wall(WallSession::new(origin));
    log::info!(
        "Wand-Konstruktion gestartet bei ({:.0}, {:.0})",
        origin.x,
        origin.z
    );
}

/// Zeigerbewegung: nur im Schritt U relevant — Richtung und Länge folgen
/// dem Zeiger. Deltas unter 1 mm lassen die letzte U-Achse unangetastet.
pub fn update(state: &mut AppState, ground: Vec3) {
    let fields = state.editor.fields;
    let angle_snap = state
        .options
        .angle_snap_enabled
        .then_some(state.options.angle_snap_increment_deg);

    let ActiveSession::Wall(session) = &mut state.session else {
        return;
    };
    if session.step != WallStep::DefiningU {
        return;
    }

    session.last_pointer = Some(ground);

    let mut delta = ground - session.origin;
    delta.y = 0.0;
    let length = delta.length();
    if length < 1.0 {
        return;
    }

    let mut direction = delta / length;
    if let Some(increment) = angle_snap {
        direction = snap_angle(direction, increment);
    }
    // Expliziter Winkel-Override gewinnt gegen den Winkel-Snap
    if let Some(deg) = fields.custom_angle_deg {
        direction = direction_from_angle_deg(deg);
    }

    session.u = WallAxis::new(direction, length);
}

/// Überträgt geänderte Feldwerte live in die laufende Session
/// (U-Feld im Schritt U, V-Feld im Schritt V, W-Feld im Schritt W).
pub fn refresh_from_fields(state: &mut AppState) {
    let fields = state.editor.fields;
    let ActiveSession::Wall(session) = &mut state.session else {
        return;
    };

    match session.step {
        WallStep::DefiningU => {
            if let Some(value) = DimensionFields::abs_value(fields.entry_u) {
                if value > 0.0 {
                    session.u.length = value;
                }
            }
        }
        WallStep::DefiningV => {
            if let (Some(value), Some(v)) = (fields.entry_v, session.v.as_mut()) {
                if value >= 0.0 {
                    v.length = value;
                }
            }
        }
        WallStep::DefiningW => {
            if let (Some(value), Some(w)) = (fields.entry_w, session.w.as_mut()) {
                if value > 0.0 {
                    w.length = value;
                }
            }
        }
    }
}

/// Bestätigt den aktuellen Schritt: U und V werden gesperrt und der nächste
/// Schritt vorbereitet; im Schritt W schließt die Bestätigung ab.
pub fn confirm_step(state: &mut AppState) {
    let fields = state.editor.fields;
    let panel_height = fields.panel_height;
    let default_height = state.options.default_height;
    let default_thickness = state.options.default_wall_thickness;

    let ActiveSession::Wall(session) = &mut state.session else {
        log::debug!("Keine Wand-Session zu bestätigen");
        return;
    };

    match session.step {
        WallStep::DefiningU => {
            let resolved = DimensionFields::abs_value(fields.entry_u).unwrap_or(session.u.length);
            if resolved < 1.0 {
                log::warn!("U nicht gesperrt: Länge {:.1} unter Minimum", resolved);
                return;
            }
            session.u.length = resolved;
            let proposed = panel_height.unwrap_or(default_height);
            session.v = Some(WallAxis::new(Vec3::Y, proposed));
            session.step = WallStep::DefiningV;
            log::info!("U gesperrt ({:.0} mm), Schritt V", resolved);
        }
        WallStep::DefiningV => {
            let proposed = session
                .v
                .map(|v| v.length)
                .unwrap_or_else(|| panel_height.unwrap_or(default_height));
            let resolved = fields.entry_v.filter(|v| *v >= 0.0).unwrap_or(proposed);
            session.v = Some(WallAxis::new(Vec3::Y, resolved));
            session.w = Some(WallAxis::new(
                perpendicular_w(session.u.direction),
                default_thickness,
            ));
            session.step = WallStep::DefiningW;
            log::info!("V gesperrt ({:.0} mm), Schritt W", resolved);
        }
        WallStep::DefiningW => complete(state),
    }
}

/// Schließt die Wand ab: liest U/V/W (Feld → Session-Wert → Default),
/// verlangt U ≥ 1 und erstellt bzw. mutiert das Volume.
pub fn complete(state: &mut AppState) {
    let session = match &state.session {
        ActiveSession::Wall(session) => session.clone(),
        _ => {
            log::debug!("Kein Wand-Abschluss: keine Session aktiv");
            return;
        }
    };

    let fields = state.editor.fields;
    let u_length = DimensionFields::abs_value(fields.entry_u).unwrap_or(session.u.length);
    if u_length < 1.0 {
        log::warn!("Wand nicht abgeschlossen: U-Länge {:.1} unter Minimum", u_length);
        return;
    }

    let v_length = fields
        .entry_v
        .filter(|v| *v >= 0.0)
        .or(session.v.map(|v| v.length))
        .or(fields.panel_height)
        .unwrap_or(state.options.default_height);
    let w_length = fields
        .entry_w
        .filter(|w| *w > 0.0)
        .or(session.w.map(|w| w.length))
        .unwrap_or(state.options.default_wall_thickness);
    let base_elevation = fields
        .entry_base
        .or(fields.panel_base)
        .unwrap_or(state.options.default_base_elevation);

    let u_direction = session.u.direction;

    match session.editing_target {
        Some(target_id) => {
            let Some(before) = state.registry.get(target_id).cloned() else {
                log::warn!("Wand-Bearbeitung verworfen: Volume {} fehlt", target_id);
                state.session = ActiveSession::Idle;
                return;
            };
            let after = wall_volume(
                target_id,
                session.origin,
                u_direction,
                u_length,
                v_length,
                w_length,
                base_elevation,
            );
            state.registry.update(target_id, |v| *v = after.clone());

            if before != after {
                let selection = state.selection.ids();
                state.history.record(CommandRecord {
                    volumes: vec![SnapshotPair::updated(before, after)],
                    selection_before: selection.clone(),
                    selection_after: selection,
                });
            }
            log::info!("Wand {} bearbeitet ({:.0}/{:.0}/{:.0})", target_id, u_length, v_length, w_length);
        }
        None => {
            let id = state.registry.allocate_id();
            let volume = wall_volume(
                id,
                session.origin,
                u_direction,
                u_length,
                v_length,
                w_length,
                base_elevation,
            );
            let selection_before = state.selection.ids();
            state.registry.add(volume.clone());
            state.selection.set_ids(&[id]);
            state.history.record(CommandRecord {
                volumes: vec![SnapshotPair::created(volume)],
                selection_before,
                selection_after: vec![id],
            });
            log::info!("Wand {} erstellt ({:.0}/{:.0}/{:.0})", id, u_length, v_length, w_length);
        }
    }

    state.session = ActiveSession::Idle;
    state.editor.fields.clear_entries();
}

/// Betritt den Bearbeitungsmodus für eine bestehende Wand: Ursprung wird
/// aus dem Volume rückgerechnet, die Felder werden vorbelegt, die Session
/// startet abschlussbereit im Schritt W.
pub fn enter_edit(state: &mut AppState, id: u64) {
    if !state.editor.wall_mode || !state.session.is_idle() {
        return;
    }
    let Some(volume) = state.registry.get(id) else {
        return;
    };
    let Some(uvw) = volume.uvw else {
        return;
    };

    let origin = derive_origin(volume);
    let u_direction = u_direction_of(volume);

    state.editor.fields.entry_u = Some(uvw.u);
    state.editor.fields.entry_v = Some(uvw.v);
    state.editor.fields.entry_w = Some(uvw.w);
    state.editor.fields.entry_base = Some(volume.base_elevation);

    state.session = ActiveSession::Wall(WallSession {
        step: WallStep::DefiningW,
        origin,
        u: WallAxis::new(u_direction, uvw.u),
        v: Some(WallAxis::new(Vec3::Y, uvw.v)),
        w: Some(WallAxis::new(perpendicular_w(u_direction), uvw.w)),
        last_pointer: None,
        editing_target: Some(id),
    });

    log::info!("Wand-Bearbeitung gestartet für Volume {}", id);
}
