//! Snapping: Raster-Snap und Feature-Snap für Bodenpunkte.
//!
//! Reihenfolge pro Abfrage: erst Raster (falls aktiv), dann Feature-Snap
//! gegen Eckpunkte/Kantenmitten/Zentren aller Volumes — der Feature-Snap
//! darf das Rasterergebnis überschreiben.

use glam::Vec3;

use super::{Volume, VolumeRegistry};

/// Rundet einen Wert auf das nächste Vielfache der Schrittweite.
pub fn snap_value(v: f32, step: f32) -> f32 {
    (v / step).round() * step
}

/// Ergebnis einer Feature-Snap-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub x: f32,
    pub z: f32,
    /// `true` wenn ein Feature-Punkt innerhalb des Fangradius lag
    pub snapped: bool,
}

/// Feature-Punkte eines einzelnen Volumes, in fester Reihenfolge:
/// 4 Basis-Ecken, 4 Basis-Kantenmitten, Basis-Zentrum, 4 Deck-Ecken
/// (gleiche XZ wie die Basis-Ecken).
///
/// Die Punkte entstehen aus den achsenparallelen Ausdehnungen um das
/// Zentrum; die Drehung bleibt bewusst unberücksichtigt.
fn feature_points_of(volume: &Volume, out: &mut Vec<Vec3>) {
    let c = volume.center;
    let half_l = volume.half_length();
    let half_w = volume.half_width();
    let base_y = volume.base_elevation;
    let top_y = volume.top_elevation();

    let base_corners = [
        Vec3::new(c.x - half_l, base_y, c.z - half_w),
        Vec3::new(c.x + half_l, base_y, c.z - half_w),
        Vec3::new(c.x + half_l, base_y, c.z + half_w),
        Vec3::new(c.x - half_l, base_y, c.z + half_w),
    ];
    let base_mids = [
        Vec3::new(c.x, base_y, c.z - half_w),
        Vec3::new(c.x + half_l, base_y, c.z),
        Vec3::new(c.x, base_y, c.z + half_w),
        Vec3::new(c.x - half_l, base_y, c.z),
    ];

    out.extend(base_corners);
    out.extend(base_mids);
    out.push(Vec3::new(c.x, base_y, c.z));
    out.extend(base_corners.map(|p| Vec3::new(p.x, top_y, p.z)));
}

/// Sammelt die Feature-Punkte aller Volumes in Registry-Reihenfolge.
pub fn collect_feature_points(registry: &VolumeRegistry) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(registry.len() * 13);
    for volume in registry.iter() {
        feature_points_of(volume, &mut points);
    }
    points
}

/// Fängt einen Bodenpunkt auf den nächsten Feature-Punkt innerhalb des
/// Radius. Vergleich über quadrierte XZ-Distanz, strikt kleiner — bei
/// Gleichstand gewinnt der zuerst gesammelte Punkt.
pub fn snap_to_feature_point(
    registry: &VolumeRegistry,
    x: f32,
    z: f32,
    radius: f32,
) -> SnapResult {
    if registry.is_empty() {
        return SnapResult {
            x,
            z,
            snapped: false,
        };
    }

    let mut best: Option<Vec3> = None;
    let mut best_d2 = radius * radius;

    for p in collect_feature_points(registry) {
        let dx = p.x - x;
        let dz = p.z - z;
        let d2 = dx * dx + dz * dz;
        if d2 < best_d2 {
            best_d2 = d2;
            best = Some(p);
        }
    }

    match best {
        Some(p) => SnapResult {
            x: p.x,
            z: p.z,
            snapped: true,
        },
        None => SnapResult {
            x,
            z,
            snapped: false,
        },
    }
}

/// Korrigiert einen Bodenpunkt: erst Raster (Schrittweite mindestens 1),
/// dann Feature-Snap. Reine Funktion über dem Registry-Zustand.
pub fn snap_ground(
    registry: &VolumeRegistry,
    x: f32,
    z: f32,
    grid_step: Option<f32>,
    feature_radius: f32,
) -> (f32, f32) {
    let (mut x, mut z) = (x, z);

    if let Some(step) = grid_step {
        let step = step.max(1.0);
        x = snap_value(x, step);
        z = snap_value(z, step);
    }

    let result = snap_to_feature_point(registry, x, z, feature_radius);
    (result.x, result.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Volume mit Basis-Ecke bei (1000, 1000): Zentrum (1500, 1500), 1000×1000.
    fn registry_with_corner_at_1000() -> VolumeRegistry {
        let mut registry = VolumeRegistry::new();
        let id = registry.allocate_id();
        registry.add(Volume::new(id, 1000.0, 1000.0, 500.0, 0.0, 1500.0, 1500.0));
        registry
    }

    #[test]
    fn snap_value_rounds_to_step() {
        assert_eq!(snap_value(14.0, 10.0), 10.0);
        assert_eq!(snap_value(15.0, 10.0), 20.0);
        assert_eq!(snap_value(-14.0, 10.0), -10.0);
    }

    #[test]
    fn feature_snap_captures_within_radius() {
        let registry = registry_with_corner_at_1000();
        let result = snap_to_feature_point(&registry, 1040.0, 1000.0, 150.0);
        assert!(result.snapped);
        assert_eq!((result.x, result.z), (1000.0, 1000.0));
    }

    #[test]
    fn feature_snap_outside_radius_returns_input() {
        let registry = registry_with_corner_at_1000();
        let result = snap_to_feature_point(&registry, 1300.0, 1000.0, 150.0);
        assert!(!result.snapped);
        assert_eq!((result.x, result.z), (1300.0, 1000.0));
    }

    #[test]
    fn tie_goes_to_first_registered_volume() {
        let mut registry = VolumeRegistry::new();
        // Zwei Volumes, deren Ecken je 50 mm links/rechts der Abfrage liegen
        let a = registry.allocate_id();
        registry.add(Volume::new(a, 100.0, 100.0, 100.0, 0.0, 0.0, 0.0));
        let b = registry.allocate_id();
        registry.add(Volume::new(b, 100.0, 100.0, 100.0, 0.0, 200.0, 0.0));

        // Ecke von a: (50, -50); Ecke von b: (150, -50) — beide 50 entfernt
        let result = snap_to_feature_point(&registry, 100.0, -50.0, 150.0);
        assert!(result.snapped);
        assert_eq!((result.x, result.z), (50.0, -50.0));
    }

    #[test]
    fn grid_then_feature_snap() {
        let registry = registry_with_corner_at_1000();
        // Raster zieht auf (1040, 1000), Feature-Snap dann auf die Ecke
        let (x, z) = snap_ground(&registry, 1043.0, 998.0, Some(10.0), 150.0);
        assert_eq!((x, z), (1000.0, 1000.0));
    }

    #[test]
    fn grid_snap_alone_when_no_feature_in_range() {
        let registry = VolumeRegistry::new();
        let (x, z) = snap_ground(&registry, 1043.0, 998.0, Some(10.0), 150.0);
        assert_eq!((x, z), (1040.0, 1000.0));
    }

    #[test]
    fn feature_points_per_volume_count_and_order() {
        let registry = registry_with_corner_at_1000();
        let points = collect_feature_points(&registry);
        assert_eq!(points.len(), 13);
        // Erste Basis-Ecke (-x, -z), dann im Uhrzeigersinn
        assert_eq!(points[0], Vec3::new(1000.0, 0.0, 1000.0));
        assert_eq!(points[1], Vec3::new(2000.0, 0.0, 1000.0));
        // Zentrum an Index 8, Deck-Ecken ab Index 9 mit Top-Y
        assert_eq!(points[8], Vec3::new(1500.0, 0.0, 1500.0));
        assert_eq!(points[9], Vec3::new(1000.0, 500.0, 1000.0));
    }
}
