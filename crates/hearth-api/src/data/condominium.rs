use serde::{Deserialize, Serialize};

use super::common::{Address, Money};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condominium {
    pub id:          u64,
    pub name:        String,
    pub address:     Address,
    #[serde(default)]
    pub amenities:   Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_fee: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units:       Option<u32>,
}

impl Condominium {
    pub fn has_amenity(&self, amenity: &str) -> bool { self.amenities.iter().any(|a| a.eq_ignore_ascii_case(amenity)) }
}
