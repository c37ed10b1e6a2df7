//! Domain model for a subscription pool.

use super::owner::Owner;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A pool of entitlements for one product, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    pub owner: Option<Owner>,
    pub product_id: String,
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
    pub consumed: Option<i64>,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub end_date: Option<DateTime<FixedOffset>>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
}
