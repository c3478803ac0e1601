use serde::{Deserialize, Serialize};

/// A broker on the agency's team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id:             u64,
    pub name:           String,
    pub email:          String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone:          Option<String>,
    /// Broker registration number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url:      Option<String>,
    #[serde(default = "active_by_default")]
    pub active:         bool,
}

fn active_by_default() -> bool { true }
