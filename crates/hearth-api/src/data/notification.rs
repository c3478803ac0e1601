use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewContact,
    PropertySold,
    PropertyRented,
    System,
    /// Kinds added by the backend after this client was built.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id:         u64,
    pub kind:       NotificationKind,
    pub title:      String,
    #[serde(default)]
    pub body:       String,
    #[serde(default)]
    pub read:       bool,
    pub created_at: DateTime<Utc>,
}
