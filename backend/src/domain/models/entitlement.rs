//! Domain model for an entitlement (a consumer's claim on a pool).

use super::{owner::Owner, pool::Pool};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// An entitlement as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    pub id: String,
    pub owner: Option<Owner>,
    pub pool: Option<Box<Pool>>,
    pub quantity: Option<i64>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
}
