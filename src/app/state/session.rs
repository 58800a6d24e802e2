//! Die aktive Editier-Session als getaggte Variante.
//!
//! Es ist zu jedem Zeitpunkt höchstens eine Session aktiv; der Eintritt in
//! eine neue wird verweigert solange eine andere läuft (Intent-Mapping).

use crate::app::tools::drag::DragSession;
use crate::app::tools::footprint::DrawSession;
use crate::app::tools::push_pull::PushPullSession;
use crate::app::tools::wall::WallSession;

/// Art der aktiven Session (für Report und Routing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Draw,
    Wall,
    PushPull,
    Drag,
}

impl SessionKind {
    /// Bezeichner für den Mengen-Report.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Draw => "draw",
            SessionKind::Wall => "wall",
            SessionKind::PushPull => "push_pull",
            SessionKind::Drag => "drag",
        }
    }
}

/// Aktive Session oder Leerlauf.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveSession {
    #[default]
    Idle,
    Draw(DrawSession),
    Wall(WallSession),
    PushPull(PushPullSession),
    Drag(DragSession),
}

impl ActiveSession {
    /// Art der aktiven Session, `None` im Leerlauf.
    pub fn kind(&self) -> Option<SessionKind> {
        match self {
            ActiveSession::Idle => None,
            ActiveSession::Draw(_) => Some(SessionKind::Draw),
            ActiveSession::Wall(_) => Some(SessionKind::Wall),
            ActiveSession::PushPull(_) => Some(SessionKind::PushPull),
            ActiveSession::Drag(_) => Some(SessionKind::Drag),
        }
    }

    /// `true` wenn keine Session aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, ActiveSession::Idle)
    }
}
