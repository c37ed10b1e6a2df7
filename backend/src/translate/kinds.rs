//! Kind tags used for translator dispatch and reporting.

use std::fmt;

/// Stable identifier for an entity variant. This is the registry key: one
/// translator per kind, dispatch is a single lookup on the source entity's
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Owner,
    User,
    CertificateSerial,
    Certificate,
    Consumer,
    Pool,
    Entitlement,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Owner => "owner",
            EntityKind::User => "user",
            EntityKind::CertificateSerial => "certificate_serial",
            EntityKind::Certificate => "certificate",
            EntityKind::Consumer => "consumer",
            EntityKind::Pool => "pool",
            EntityKind::Entitlement => "entitlement",
        }
    }

    /// Every kind the registry can be asked to dispatch on.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Owner,
        EntityKind::User,
        EntityKind::CertificateSerial,
        EntityKind::Certificate,
        EntityKind::Consumer,
        EntityKind::Pool,
        EntityKind::Entitlement,
    ];
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination-kind tag. Used to report what a translator produces and to
/// validate typed lookups; never used for dispatch (dispatch is on the
/// source kind alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DtoKind {
    Owner,
    User,
    CertificateSerial,
    Certificate,
    Consumer,
    Pool,
    Entitlement,
}

impl DtoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DtoKind::Owner => "owner",
            DtoKind::User => "user",
            DtoKind::CertificateSerial => "certificate_serial",
            DtoKind::Certificate => "certificate",
            DtoKind::Consumer => "consumer",
            DtoKind::Pool => "pool",
            DtoKind::Entitlement => "entitlement",
        }
    }
}

impl fmt::Display for DtoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
