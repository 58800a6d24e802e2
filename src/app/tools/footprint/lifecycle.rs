//! Lifecycle des Footprint-Zeichnens: Start, Live-Update, Commit.

use glam::Vec3;

use super::geometry::{footprint_volume, resolve_endpoint};
use super::state::DrawSession;
use crate::app::history::{CommandRecord, SnapshotPair};
use crate::app::state::{ActiveSession, AppState, DimensionFields};

/// Startet eine Zeichen-Session am (bereits gesnappten) Bodenpunkt.
/// Verweigert den Start solange eine andere Session aktiv ist.
pub fn begin(state: &mut AppState, origin: Vec3) {
    if !state.session.is_idle() {
        log::debug!("Zeichnen nicht gestartet: andere Session aktiv");
        return;
    }
    state.session = ActiveSession::Draw(DrawSession::new(origin));
    log::info!(
        "Footprint-Zeichnen gestartet bei ({:.0}, {:.0})",
        origin.x,
        origin.z
    );
}

/// Berechnet den provisorischen Endpunkt neu (jede Zeigerbewegung).
///
/// Override-Präzedenz pro Achse: Dimensionseingabe → in dieser Session
/// beschriebenes Seitenpanel-Feld → Zeiger-Delta.
pub fn update(state: &mut AppState, ground: Vec3) {
    let fields = state.editor.fields;
    let ActiveSession::Draw(session) = &mut state.session else {
        return;
    };

    session.last_ground = Some(ground);

    let length_override = DimensionFields::abs_value(fields.entry_u).or_else(|| {
        session
            .panel_length_manual
            .then_some(DimensionFields::abs_value(fields.panel_length))
            .flatten()
    });
    let width_override = DimensionFields::abs_value(fields.entry_w).or_else(|| {
        session
            .panel_width_manual
            .then_some(DimensionFields::abs_value(fields.panel_width))
            .flatten()
    });

    session.provisional_end =
        resolve_endpoint(session.origin, ground, length_override, width_override);
}

/// Wertet die Override-Präzedenz mit dem letzten Bodenpunkt neu aus
/// (nach einer Feldänderung, damit die Vorschau sofort folgt).
pub fn refresh(state: &mut AppState) {
    let last_ground = match &state.session {
        ActiveSession::Draw(session) => session.last_ground,
        _ => return,
    };
    if let Some(ground) = last_ground {
        update(state, ground);
    }
}

/// Schließt die Session ab: Volume anlegen, selektieren, Command aufzeichnen.
pub fn commit(state: &mut AppState) {
    if !matches!(state.session, ActiveSession::Draw(_)) {
        log::debug!("Kein Commit: keine Zeichen-Session aktiv");
        return;
    }
    let ActiveSession::Draw(session) = std::mem::take(&mut state.session) else {
        unreachable!()
    };

    let fields = state.editor.fields;
    let height = fields
        .entry_v
        .or(fields.panel_height)
        .unwrap_or(state.options.default_height)
        .max(0.0);
    let base_elevation = fields
        .entry_base
        .or(fields.panel_base)
        .unwrap_or(state.options.default_base_elevation);

    let id = state.registry.allocate_id();
    let volume = footprint_volume(
        id,
        session.origin,
        session.provisional_end,
        height,
        base_elevation,
    );

    let selection_before = state.selection.ids();
    state.registry.add(volume.clone());
    state.selection.set_ids(&[id]);

    state.history.record(CommandRecord {
        volumes: vec![SnapshotPair::created(volume.clone())],
        selection_before,
        selection_after: vec![id],
    });

    state.editor.fields.clear_entries();

    log::info!(
        "Volume {} erstellt ({:.0} × {:.0} × {:.0})",
        id,
        volume.length,
        volume.width,
        volume.height
    );
}
