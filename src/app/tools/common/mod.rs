//! Gemeinsame Hilfstypen und -funktionen für die Editier-Sessions.

pub mod geometry;

pub use geometry::{
    axis_from_normal, direction_from_angle_deg, locked_axis_vector, snap_angle, Axis, Plane, Ray,
};
