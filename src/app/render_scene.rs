//! Aufbau der Render-Szene aus dem aktuellen Zustand.
//!
//! Reiner Lesepfad: der externe Renderer ruft das pro Frame ab, hier wird
//! nichts mutiert. Die Session-Vorschauen sind Darstellungsdaten, keine
//! Registry-Effekte.

use glam::Vec3;

use super::events::PickResult;
use super::state::{ActiveSession, AppState};
use super::tools::common::axis_from_normal;
use super::tools::footprint::geometry::dims_from_corners;
use super::tools::footprint::DrawSession;
use super::tools::wall::geometry::wall_corners;
use super::tools::wall::{WallSession, WallStep};
use crate::shared::{FaceHighlight, PreviewGeometry, RenderScene, VolumeVisual};

/// Baut die komplette Szene für einen Frame.
pub fn build(state: &AppState) -> RenderScene {
    let volumes = state
        .registry
        .iter()
        .map(|v| VolumeVisual {
            id: v.id,
            center: v.center,
            length: v.length,
            width: v.width,
            height: v.height,
            orientation: v.orientation,
            selected: state.selection.contains(v.id),
        })
        .collect();

    let preview = match &state.session {
        ActiveSession::Draw(session) => Some(footprint_preview(session)),
        ActiveSession::Wall(session) => Some(wall_preview(state, session)),
        _ => None,
    };

    RenderScene { volumes, preview }
}

/// Footprint-Vorschau: geschlossenes Rechteck auf der Bodenebene.
fn footprint_preview(session: &DrawSession) -> PreviewGeometry {
    let a = session.origin;
    let dims = dims_from_corners(a, session.provisional_end);

    PreviewGeometry::closed_loop(vec![
        Vec3::new(a.x, 0.0, a.z),
        Vec3::new(a.x + dims.dx, 0.0, a.z),
        Vec3::new(a.x + dims.dx, 0.0, a.z + dims.dz),
        Vec3::new(a.x, 0.0, a.z + dims.dz),
    ])
}

/// Wand-Vorschau je Schritt: U als Linie, V als U×V-Rechteck,
/// W als komplettes Drahtgitter (vordere + hintere Fläche + 4 Kanten).
fn wall_preview(state: &AppState, session: &WallSession) -> PreviewGeometry {
    let fields = state.editor.fields;
    let base = fields
        .entry_base
        .or(fields.panel_base)
        .unwrap_or(state.options.default_base_elevation);

    let origin = session.origin;
    let u = session.u;

    match session.step {
        WallStep::DefiningU => {
            PreviewGeometry::line(origin, origin + u.direction * u.length)
        }
        WallStep::DefiningV => {
            let v_length = session.v.map(|v| v.length).unwrap_or(0.0);
            let run = u.direction * u.length;
            let p1 = Vec3::new(origin.x, base, origin.z);
            let p2 = p1 + run;
            PreviewGeometry::closed_loop(vec![
                p1,
                p2,
                Vec3::new(p2.x, base + v_length, p2.z),
                Vec3::new(p1.x, base + v_length, p1.z),
            ])
        }
        WallStep::DefiningW => {
            let v_length = session.v.map(|v| v.length).unwrap_or(0.0);
            let w_length = session.w.map(|w| w.length).unwrap_or(0.0);
            let corners = wall_corners(origin, u.direction, u.length, v_length, w_length, base);
            PreviewGeometry {
                points: corners.to_vec(),
                segments: vec![
                    // vordere Fläche
                    (0, 1),
                    (1, 2),
                    (2, 3),
                    (3, 0),
                    // hintere Fläche
                    (4, 5),
                    (5, 6),
                    (6, 7),
                    (7, 4),
                    // Verbindungskanten
                    (0, 4),
                    (1, 5),
                    (2, 6),
                    (3, 7),
                ],
            }
        }
    }
}

/// Hover-Hervorhebung: welche Fläche ein Push-Pull-Griff an diesem Pick
/// nehmen würde. Nur außerhalb aktiver Sessions und bei aktivem Push-Pull.
pub fn hover_face(state: &AppState, pick: &PickResult) -> Option<FaceHighlight> {
    if !state.editor.push_pull_enabled || !state.session.is_idle() {
        return None;
    }
    let PickResult::Volume { id, normal, .. } = pick else {
        return None;
    };
    let volume = state.registry.get(*id)?;

    let axis_vec = axis_from_normal(*normal);
    let (l, h, w) = (volume.length, volume.height, volume.width);

    let (half_extents, offset) = if axis_vec.x != 0.0 {
        ((w / 2.0, h / 2.0), l / 2.0)
    } else if axis_vec.y != 0.0 {
        ((l / 2.0, w / 2.0), h / 2.0)
    } else {
        ((l / 2.0, h / 2.0), w / 2.0)
    };

    Some(FaceHighlight {
        center: volume.center + axis_vec * offset,
        normal: axis_vec,
        half_extents,
    })
}
