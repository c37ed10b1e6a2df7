//! Domain models for certificates and their serial records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Serial-number record backing a certificate. Kept as its own entity so
/// revocation state can be tracked after the certificate body is gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateSerial {
    pub id: String,
    pub serial: i64,
    pub expiration: Option<DateTime<FixedOffset>>,
    pub revoked: Option<bool>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
}

/// An identity or entitlement certificate as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    /// PEM-encoded private key.
    pub key: String,
    /// PEM-encoded certificate body.
    pub cert: String,
    pub serial: Option<CertificateSerial>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
}
