use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    House,
    Apartment,
    Land,
    Commercial,
    Farm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    #[default]
    Available,
    Reserved,
    Sold,
    Rented,
}

impl PropertyStatus {
    /// Whether the listing should still be shown publicly.
    pub fn is_listed(&self) -> bool { matches!(self, PropertyStatus::Available | PropertyStatus::Reserved) }
}

/// A listed property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id:             u64,
    pub title:          String,
    pub kind:           PropertyKind,
    #[serde(default)]
    pub status:         PropertyStatus,
    pub price:          Money,
    pub address:        Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description:    Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms:       Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms:      Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_m2:        Option<f64>,
    #[serde(default)]
    pub images:         Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id:       Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condominium_id: Option<u64>,
    #[serde(default)]
    pub featured:       bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at:     Option<DateTime<Utc>>,
}

impl Property {
    /// Public gallery slug for this property.
    pub fn gallery_slug(&self) -> String {
        match i64::try_from(self.id) {
            Ok(id) => hearth_slug::encode(id),
            Err(_) => self.id.to_string(),
        }
    }

    pub fn gallery_path(&self) -> String { format!("/gallery/{}", self.gallery_slug()) }

    /// First image, used as the listing cover.
    pub fn cover_image(&self) -> Option<&str> { self.images.first().map(String::as_str) }
}
