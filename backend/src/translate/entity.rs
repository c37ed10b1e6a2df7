//! Borrowed tagged union over the entity variants.

use super::kinds::EntityKind;
use crate::domain::models::{
    Certificate, CertificateSerial, Consumer, Entitlement, Owner, Pool, User,
};

/// A borrowed entity of any registered variant, tagged with its kind.
///
/// This is what the dispatch path works with: translators and the facade
/// never clone an entity graph just to look at it. Every entity model has a
/// `From<&T>` conversion, so callers can hand `(&owner).into()` or use the
/// generic facade methods that accept `Option<&T>` directly.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Owner(&'a Owner),
    User(&'a User),
    CertificateSerial(&'a CertificateSerial),
    Certificate(&'a Certificate),
    Consumer(&'a Consumer),
    Pool(&'a Pool),
    Entitlement(&'a Entitlement),
}

impl EntityRef<'_> {
    /// The kind tag the registry dispatches on.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Owner(_) => EntityKind::Owner,
            EntityRef::User(_) => EntityKind::User,
            EntityRef::CertificateSerial(_) => EntityKind::CertificateSerial,
            EntityRef::Certificate(_) => EntityKind::Certificate,
            EntityRef::Consumer(_) => EntityKind::Consumer,
            EntityRef::Pool(_) => EntityKind::Pool,
            EntityRef::Entitlement(_) => EntityKind::Entitlement,
        }
    }
}

impl<'a> From<&'a Owner> for EntityRef<'a> {
    fn from(entity: &'a Owner) -> Self {
        EntityRef::Owner(entity)
    }
}

impl<'a> From<&'a User> for EntityRef<'a> {
    fn from(entity: &'a User) -> Self {
        EntityRef::User(entity)
    }
}

impl<'a> From<&'a CertificateSerial> for EntityRef<'a> {
    fn from(entity: &'a CertificateSerial) -> Self {
        EntityRef::CertificateSerial(entity)
    }
}

impl<'a> From<&'a Certificate> for EntityRef<'a> {
    fn from(entity: &'a Certificate) -> Self {
        EntityRef::Certificate(entity)
    }
}

impl<'a> From<&'a Consumer> for EntityRef<'a> {
    fn from(entity: &'a Consumer) -> Self {
        EntityRef::Consumer(entity)
    }
}

impl<'a> From<&'a Pool> for EntityRef<'a> {
    fn from(entity: &'a Pool) -> Self {
        EntityRef::Pool(entity)
    }
}

impl<'a> From<&'a Entitlement> for EntityRef<'a> {
    fn from(entity: &'a Entitlement) -> Self {
        EntityRef::Entitlement(entity)
    }
}
