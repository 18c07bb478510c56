use serde::{Deserialize, Serialize};

/// Board lane an activity sits in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lane {
    #[default]
    Planned,
    InProgress,
    Completed,
    Paused,
}

/// Health indicator shown on a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStatus {
    #[default]
    OnTrack,
    AtRisk,
    OffTrack,
}

/// An activity tracked on the kanban board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCard {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub lane: Lane,
    #[serde(default)]
    pub status: CardStatus,
}

/// Payload for creating or replacing a card. Lane and status default to a
/// freshly planned, on-track activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewKanbanCard {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub lane: Lane,
    #[serde(default)]
    pub status: CardStatus,
}
