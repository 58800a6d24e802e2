//! Mengenermittlung: abgeleiteter, read-only Report über Registry + Selektion.
//!
//! Wird nach jeder Mutation und jedem Selektionswechsel neu aufgebaut und
//! als JSON veröffentlicht.

use glam::Vec3;
use indexmap::IndexSet;
use serde::Serialize;

use super::{Volume, VolumeRegistry};

/// Rundet auf 0.1 mm (nur für Positionsangaben im Report).
fn round_tenth(n: f32) -> f32 {
    (n * 10.0).round() / 10.0
}

/// Flächen der sechs Quaderseiten plus Gesamtoberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FaceAreas {
    pub top: f32,
    pub bottom: f32,
    pub pos_x: f32,
    pub neg_x: f32,
    pub pos_z: f32,
    pub neg_z: f32,
    pub total_surface_area: f32,
}

/// Mengen eines einzelnen Volumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeQuantities {
    pub id: u64,
    pub base_elevation: f32,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    /// Weltposition des Zentrums, auf 0.1 mm gerundet
    pub position: [f32; 3],
    pub areas: FaceAreas,
    pub perimeter_base: f32,
    pub volume: f32,
}

/// Summen über eine Volume-Menge (je Metrik aufsummiert).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct QuantityTotals {
    pub volume: f32,
    pub top: f32,
    pub bottom: f32,
    pub pos_x: f32,
    pub neg_x: f32,
    pub pos_z: f32,
    pub neg_z: f32,
    pub total_surface_area: f32,
    pub perimeter_base: f32,
}

/// Transiente Zustandsflags für den Report.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SessionFlags {
    /// Art der aktiven Session ("draw", "wall", "push_pull", "drag")
    pub active_session: Option<&'static str>,
    /// Aktuelle Achsensperre im Push-Pull ('x' | 'y' | 'z')
    pub axis_lock: Option<char>,
}

/// Vollständiger Mengen-Report.
#[derive(Debug, Clone, Serialize)]
pub struct QuantityReport {
    pub units: &'static str,
    pub count: usize,
    pub selected_count: usize,
    pub selected_ids: Vec<u64>,
    pub volumes: Vec<VolumeQuantities>,
    pub selected: Vec<VolumeQuantities>,
    pub totals_all: QuantityTotals,
    pub totals_selected: QuantityTotals,
    pub session: SessionFlags,
}

/// Berechnet die Mengen eines Volumes aus seinen Ausdehnungen.
pub fn volume_quantities(volume: &Volume) -> VolumeQuantities {
    let l = volume.length;
    let h = volume.height;
    let w = volume.width;
    let Vec3 { x, y, z } = volume.center;

    let area_top = l * w;
    let area_x = w * h;
    let area_z = l * h;

    VolumeQuantities {
        id: volume.id,
        base_elevation: volume.base_elevation,
        length: l,
        width: w,
        height: h,
        position: [round_tenth(x), round_tenth(y), round_tenth(z)],
        areas: FaceAreas {
            top: area_top,
            bottom: area_top,
            pos_x: area_x,
            neg_x: area_x,
            pos_z: area_z,
            neg_z: area_z,
            total_surface_area: 2.0 * (l * w + l * h + w * h),
        },
        perimeter_base: 2.0 * (l + w),
        volume: l * w * h,
    }
}

fn totals_of(quantities: &[VolumeQuantities]) -> QuantityTotals {
    quantities
        .iter()
        .fold(QuantityTotals::default(), |mut acc, q| {
            acc.volume += q.volume;
            acc.top += q.areas.top;
            acc.bottom += q.areas.bottom;
            acc.pos_x += q.areas.pos_x;
            acc.neg_x += q.areas.neg_x;
            acc.pos_z += q.areas.pos_z;
            acc.neg_z += q.areas.neg_z;
            acc.total_surface_area += q.areas.total_surface_area;
            acc.perimeter_base += q.perimeter_base;
            acc
        })
}

/// Baut den Report aus Registry, Selektion und transienten Flags.
pub fn build_report(
    registry: &VolumeRegistry,
    selected_ids: &IndexSet<u64>,
    session: SessionFlags,
) -> QuantityReport {
    let volumes: Vec<VolumeQuantities> = registry.iter().map(volume_quantities).collect();
    let selected: Vec<VolumeQuantities> = registry
        .iter()
        .filter(|v| selected_ids.contains(&v.id))
        .map(volume_quantities)
        .collect();

    QuantityReport {
        units: "mm",
        count: volumes.len(),
        selected_count: selected.len(),
        selected_ids: selected_ids.iter().copied().collect(),
        totals_all: totals_of(&volumes),
        totals_selected: totals_of(&selected),
        volumes,
        selected,
        session,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> VolumeRegistry {
        let mut registry = VolumeRegistry::new();
        let a = registry.allocate_id();
        registry.add(Volume::new(a, 500.0, 300.0, 2700.0, 0.0, 250.0, -150.0));
        let b = registry.allocate_id();
        registry.add(Volume::new(b, 1000.0, 200.0, 1000.0, 0.0, 0.0, 0.0));
        registry
    }

    #[test]
    fn quantities_of_single_volume() {
        let v = Volume::new(1, 500.0, 300.0, 2700.0, 0.0, 250.0, -150.0);
        let q = volume_quantities(&v);

        assert_eq!(q.volume, 500.0 * 300.0 * 2700.0);
        assert_eq!(q.areas.top, 150_000.0);
        assert_eq!(q.areas.pos_x, 300.0 * 2700.0);
        assert_eq!(q.areas.pos_z, 500.0 * 2700.0);
        assert_eq!(q.perimeter_base, 1600.0);
        assert_eq!(
            q.areas.total_surface_area,
            2.0 * (150_000.0 + 500.0 * 2700.0 + 300.0 * 2700.0)
        );
        assert_eq!(q.position, [250.0, 1350.0, -150.0]);
    }

    #[test]
    fn report_totals_sum_all_volumes() {
        let registry = sample_registry();
        let selected: IndexSet<u64> = [2u64].into_iter().collect();
        let report = build_report(&registry, &selected, SessionFlags::default());

        assert_eq!(report.count, 2);
        assert_eq!(report.selected_count, 1);
        assert_eq!(report.selected_ids, vec![2]);
        let expected_total = 500.0 * 300.0 * 2700.0 + 1000.0 * 200.0 * 1000.0;
        assert_eq!(report.totals_all.volume, expected_total);
        assert_eq!(report.totals_selected.volume, 1000.0 * 200.0 * 1000.0);
    }

    #[test]
    fn report_serializes_to_json() {
        let registry = sample_registry();
        let selected = IndexSet::new();
        let report = build_report(&registry, &selected, SessionFlags::default());
        let json = serde_json::to_string(&report).expect("Report serialisierbar");
        assert!(json.contains("\"units\":\"mm\""));
        assert!(json.contains("\"totals_all\""));
    }
}
