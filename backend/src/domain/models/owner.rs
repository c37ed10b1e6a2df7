//! Domain model for an owner (the organization a subscription belongs to).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An owner as stored. Owners form a hierarchy through `parent_owner`;
/// the hierarchy is a tree by construction (an owner is created under at
/// most one parent and never re-parented into its own subtree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    /// Stable business key, unique across owners.
    pub key: String,
    pub display_name: String,
    pub parent_owner: Option<Box<Owner>>,
    pub content_access_mode: Option<String>,
    pub auto_bind_disabled: Option<bool>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
}

impl Owner {
    /// Generate a unique ID for a new owner record.
    pub fn generate_id() -> String {
        format!("owner::{}", Uuid::new_v4())
    }
}
