//! Rein-mathematische Footprint-Berechnungen.

use glam::Vec3;

use crate::core::Volume;
use crate::shared::options::MIN_HORIZONTAL_EXTENT;

/// Vorzeichen eines Zeiger-Deltas; numerisch ~0 zählt als +1.
fn delta_sign(d: f32) -> f32 {
    if d.abs() < 1e-6 {
        1.0
    } else {
        d.signum()
    }
}

/// Maße zwischen zwei gegenüberliegenden Footprint-Ecken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintDims {
    pub dx: f32,
    pub dz: f32,
    pub len: f32,
    pub wid: f32,
    pub sx: f32,
    pub sz: f32,
}

/// Berechnet die Footprint-Maße aus Ursprung und Endpunkt.
pub fn dims_from_corners(a: Vec3, b: Vec3) -> FootprintDims {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    FootprintDims {
        dx,
        dz,
        len: dx.abs(),
        wid: dz.abs(),
        sx: delta_sign(dx),
        sz: delta_sign(dz),
    }
}

/// Löst den provisorischen Endpunkt auf: Betrag pro Achse aus dem Override
/// (falls vorhanden), sonst aus dem Zeiger-Delta; das Vorzeichen kommt immer
/// vom Zeiger-Delta.
pub fn resolve_endpoint(
    origin: Vec3,
    pointer: Vec3,
    length_override: Option<f32>,
    width_override: Option<f32>,
) -> Vec3 {
    let d = pointer - origin;
    let sx = delta_sign(d.x);
    let sz = delta_sign(d.z);

    let l = length_override.unwrap_or_else(|| d.x.abs());
    let w = width_override.unwrap_or_else(|| d.z.abs());

    Vec3::new(origin.x + sx * l, 0.0, origin.z + sz * w)
}

/// Baut das Volume aus dem Footprint: horizontale Maße mindestens 1,
/// Zentrum bei Ursprung + vorzeichenbehafteten Halbausdehnungen.
pub fn footprint_volume(
    id: u64,
    origin: Vec3,
    end: Vec3,
    height: f32,
    base_elevation: f32,
) -> Volume {
    let dims = dims_from_corners(origin, end);
    let l = dims.len.max(MIN_HORIZONTAL_EXTENT);
    let w = dims.wid.max(MIN_HORIZONTAL_EXTENT);

    let cx = origin.x + (dims.sx * l) / 2.0;
    let cz = origin.z + (dims.sz * w) / 2.0;

    Volume::new(id, l, w, height.max(0.0), base_elevation, cx, cz)
}
