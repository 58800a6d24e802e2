//! Geteilte Typen: Laufzeit-Optionen und Render-Szenen-Daten.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{FaceHighlight, PreviewGeometry, RenderScene, VolumeVisual};
