use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// A stored enquiry, as returned to the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id:          u64,
    pub name:        String,
    pub email:       String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone:       Option<String>,
    pub message:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<u64>,
    #[serde(default)]
    pub read:        bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at:  Option<DateTime<Utc>>,
}

/// An enquiry submitted from the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name:        String,
    pub email:       String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone:       Option<String>,
    pub message:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<u64>,
}

impl NewContact {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            email:       email.into(),
            phone:       None,
            message:     message.into(),
            property_id: None,
        }
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn about_property(mut self, property_id: u64) -> Self {
        self.property_id = Some(property_id);
        self
    }

    /// Key for rate limiting: the normalized email.
    pub fn sender_key(&self) -> String { self.email.trim().to_lowercase() }

    /// Reject submissions the backend would refuse anyway.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation {
                field:  "name",
                reason: "must not be empty",
            });
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => {
                return Err(ApiError::Validation {
                    field:  "email",
                    reason: "must look like name@domain.tld",
                });
            }
        }
        if self.message.trim().is_empty() {
            return Err(ApiError::Validation {
                field:  "message",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}
