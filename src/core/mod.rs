//! Core-Domänentypen: Volumes, Registry, Snapping, Mengenermittlung.

pub mod quantities;
pub mod registry;
pub mod snapping;
/// Core-Datenmodell für Takeoff-Volumes
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Volume: Achsenparalleler Quader (Box oder Wand) mit Basis-Höhe und Drehung
/// - VolumeRegistry: Container für alle Volumes mit ID-Vergabe
pub mod volume;

pub use quantities::{build_report, FaceAreas, QuantityReport, QuantityTotals, SessionFlags};
pub use registry::VolumeRegistry;
pub use snapping::{collect_feature_points, snap_ground, snap_to_feature_point, snap_value, SnapResult};
pub use volume::{UvwExtents, Volume};
