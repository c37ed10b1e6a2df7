//! Domain model for a user account.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A user account as stored. The password is only ever held in hashed
/// form; raw credentials are hashed on the way in (see
/// [`User::hash_password`]) and never leave the domain layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub hashed_password: Option<String>,
    pub super_admin: Option<bool>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
}

impl User {
    /// Generate a unique ID for a new user record.
    pub fn generate_id() -> String {
        format!("user::{}", Uuid::new_v4())
    }

    /// One-way transform for raw credential material: SHA-256, hex encoded.
    pub fn hash_password(raw: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        hex::encode(hasher.finalize())
    }
}
