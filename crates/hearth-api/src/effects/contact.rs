use std::sync::Arc;

use hearth_rate::{Clock, FixedWindowLimiter, SystemClock};
use tracing::{debug, info};

use super::client::ApiClient;
use super::http::HttpClient;
use crate::data::{Contact, NewContact};
use crate::error::{ApiError, Result};

const CONTACTS_PATH: &str = "contacts";

/// Public contact form, limited per sender email.
pub struct ContactService<'a, C, K: Clock = SystemClock> {
    client:  &'a ApiClient<C>,
    limiter: Arc<FixedWindowLimiter<K>>,
}

impl<'a, C, K> ContactService<'a, C, K>
where
    C: HttpClient,
    K: Clock,
{
    pub fn new(client: &'a ApiClient<C>, limiter: Arc<FixedWindowLimiter<K>>) -> Self { Self { client, limiter } }

    pub fn limiter(&self) -> &FixedWindowLimiter<K> { &self.limiter }

    /// Validate and post an enquiry.
    ///
    /// Invalid input and senders over their limit fail before anything is
    /// sent. A rejected attempt does not use up the sender's allowance.
    pub async fn submit(&self, contact: &NewContact) -> Result<Contact> {
        contact.validate()?;

        let key = contact.sender_key();
        if !self.limiter.can_proceed(&key) {
            let retry_after = self.limiter.time_until_reset(&key);
            debug!(sender = %key, ?retry_after, "contact submission rate limited");
            return Err(ApiError::RateLimited { retry_after });
        }

        let created: Contact = self.client.post_json(CONTACTS_PATH, contact).await?;
        info!(contact_id = created.id, property_id = ?created.property_id, "contact submitted");
        Ok(created)
    }
}
