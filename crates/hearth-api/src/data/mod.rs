//! Records exchanged with the backend.
//!
//! Required fields are plain values and optional ones are `Option`, so a
//! response missing a required field fails at deserialization instead of
//! somewhere down the call chain.

mod agent;
mod common;
mod condominium;
mod contact;
mod notification;
mod property;

pub use agent::Agent;
pub use common::{Address, Money};
pub use condominium::Condominium;
pub use contact::{Contact, NewContact};
pub use notification::{Notification, NotificationKind};
pub use property::{Property, PropertyKind, PropertyStatus};
