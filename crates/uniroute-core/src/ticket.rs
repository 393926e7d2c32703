//! Per-navigation identity used in log events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationKind {
    NavigateTo,
    RedirectTo,
    ReLaunch,
    SwitchTab,
    NavigateBack,
}

impl NavigationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationKind::NavigateTo => "navigateTo",
            NavigationKind::RedirectTo => "redirectTo",
            NavigationKind::ReLaunch => "reLaunch",
            NavigationKind::SwitchTab => "switchTab",
            NavigationKind::NavigateBack => "navigateBack",
        }
    }
}

impl std::fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one facade call from request to settlement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationTicket {
    pub id: Uuid,
    pub kind: NavigationKind,
    pub started_at: DateTime<Utc>,
}

impl NavigationTicket {
    pub fn new(kind: NavigationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            started_at: Utc::now(),
        }
    }

    /// Milliseconds since the navigation was requested
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}
