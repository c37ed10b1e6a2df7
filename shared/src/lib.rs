//! API-facing data-transfer objects for the entitlement tracker.
//!
//! These structs describe the wire-visible shape of each stored entity. The
//! backend's translation layer produces them; the serialization layer renders
//! them to JSON without further transformation. Fields that may be absent are
//! `Option` and are skipped when `None`, so absence shows up as a missing key
//! rather than an explicit `null`.
//!
//! All timestamps are UTC (RFC 3339 on the wire) - the translation layer
//! normalizes whatever offset the storage layer produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire shape of an owner (the organization a subscription belongs to).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnerDto {
    pub id: String,
    /// Stable business key, e.g. "acme". Also used in the owner's href.
    pub key: String,
    pub display_name: String,
    /// API path for this owner: `/owners/{key}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Parent in the owner hierarchy, if this owner has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_owner: Option<Box<OwnerDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_access_mode: Option<String>,
    pub auto_bind_disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Wire shape of a user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    /// Only ever populated on intake (create/update requests). Responses
    /// never carry a password, hashed or otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub super_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Wire shape of a certificate serial record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateSerialDto {
    pub id: String,
    /// The serial number itself, distinct from the record id.
    pub serial: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
    pub revoked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Wire shape of an identity or entitlement certificate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateDto {
    pub id: String,
    /// PEM-encoded private key.
    pub key: String,
    /// PEM-encoded certificate body.
    pub cert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<CertificateSerialDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Wire shape of a consumer (a system registered to receive entitlements).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumerDto {
    pub id: String,
    /// Public identity of the consumer, distinct from the database id.
    pub uuid: String,
    pub name: String,
    /// API path for this consumer: `/consumers/{uuid}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checkin: Option<DateTime<Utc>>,
    pub entitlement_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Wire shape of a subscription pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerDto>,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Total entitlement quantity the pool provides.
    pub quantity: i64,
    /// Quantity currently consumed out of the pool.
    pub consumed: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Wire shape of an entitlement (a consumer's claim on a pool).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitlementDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<Box<PoolDto>>,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}
