//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die persistente Konfiguration der Sitzung (Einstellungen,
//! Recent-Files, Pfade) und die Render-Szene, die `app` baut und `render`
//! zeichnet.

pub mod options;
pub mod recent_files;
pub mod render_scene;

pub use options::{
    label_color, AnnotatorSettings, HistoryScope, LabelError, Rgb, SessionPaths, NAVIGATION_JUMP,
};
pub use recent_files::RecentFiles;
pub use render_scene::{EntityItem, RelationItem, RenderScene, TokenItem};
