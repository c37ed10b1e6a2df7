//! Domain model for a consumer (a system registered for entitlements).

use super::owner::Owner;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered consumer as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    pub id: String,
    /// Public identity handed to the client at registration; distinct from
    /// the database id and used in API paths.
    pub uuid: String,
    pub name: String,
    pub owner: Option<Owner>,
    pub last_checkin: Option<DateTime<FixedOffset>>,
    pub entitlement_count: Option<i64>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
}

impl Consumer {
    /// Generate the public identity for a new consumer.
    pub fn generate_uuid() -> String {
        Uuid::new_v4().to_string()
    }
}
