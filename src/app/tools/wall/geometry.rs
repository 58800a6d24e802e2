//! Rein-mathematische Wand-Berechnungen.

use glam::Vec3;

use crate::core::{UvwExtents, Volume};

/// W-Richtung: horizontal senkrecht zu U, als cross(U, Hochachse).
pub fn perpendicular_w(u_direction: Vec3) -> Vec3 {
    u_direction.cross(Vec3::Y).normalize()
}

/// U-Richtung aus der gespeicherten Drehung eines Volumes.
pub fn u_direction_of(volume: &Volume) -> Vec3 {
    Vec3::new(volume.orientation.cos(), 0.0, volume.orientation.sin())
}

/// Baut die Wand aus Ursprung und UVW-Achsen:
/// Zentrum = Ursprung + U·(U/2) + W·(W/2), Höhe = V,
/// Drehung = atan2 der U-Richtung.
pub fn wall_volume(
    id: u64,
    origin: Vec3,
    u_direction: Vec3,
    u_length: f32,
    v_length: f32,
    w_length: f32,
    base_elevation: f32,
) -> Volume {
    let w_direction = perpendicular_w(u_direction);

    let center_x = origin.x + u_direction.x * (u_length / 2.0) + w_direction.x * (w_length / 2.0);
    let center_z = origin.z + u_direction.z * (u_length / 2.0) + w_direction.z * (w_length / 2.0);

    let mut volume = Volume::new(
        id,
        u_length,
        w_length,
        v_length,
        base_elevation,
        center_x,
        center_z,
    );
    volume.orientation = u_direction.z.atan2(u_direction.x);
    volume.uvw = Some(UvwExtents {
        u: u_length,
        v: v_length,
        w: w_length,
    });
    volume
}

/// Rückrechnung des Ursprungs (Start-Ecke) aus dem aktuellen Volume:
/// Ursprung = Zentrum − U·(U/2) − W·(W/2), auf Basis-Höhe.
pub fn derive_origin(volume: &Volume) -> Vec3 {
    let u_direction = u_direction_of(volume);
    let w_direction = perpendicular_w(u_direction);

    Vec3::new(
        volume.center.x
            - u_direction.x * volume.half_length()
            - w_direction.x * volume.half_width(),
        volume.base_elevation,
        volume.center.z
            - u_direction.z * volume.half_length()
            - w_direction.z * volume.half_width(),
    )
}

/// Die acht Eckpunkte der Wand-Vorschau: vordere Fläche (U×V ab Ursprung)
/// plus hintere Fläche um W versetzt.
pub fn wall_corners(
    origin: Vec3,
    u_direction: Vec3,
    u_length: f32,
    v_length: f32,
    w_length: f32,
    base_elevation: f32,
) -> [Vec3; 8] {
    let u = u_direction * u_length;
    let w = perpendicular_w(u_direction) * w_length;

    let p1 = Vec3::new(origin.x, base_elevation, origin.z);
    let p2 = p1 + u;
    let p3 = Vec3::new(p2.x, base_elevation + v_length, p2.z);
    let p4 = Vec3::new(p1.x, base_elevation + v_length, p1.z);

    [p1, p2, p3, p4, p1 + w, p2 + w, p3 + w, p4 + w]
}
