//! Owned tagged union over the DTO variants.

use super::{error::TranslationError, kinds::DtoKind};
use shared::{
    CertificateDto, CertificateSerialDto, ConsumerDto, EntitlementDto, OwnerDto, PoolDto, UserDto,
};

/// A produced DTO of any variant, tagged with its kind.
///
/// The facade returns this; callers that know the destination type unwrap
/// it with the `TryFrom` impls below (or use
/// [`ModelTranslator::translate_as`](super::ModelTranslator::translate_as),
/// which does the unwrap for them). An unwrap against the wrong variant is
/// an [`TranslationError::InvalidArgument`] - it means a translator was
/// registered for a kind it does not produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Dto {
    Owner(OwnerDto),
    User(UserDto),
    CertificateSerial(CertificateSerialDto),
    Certificate(CertificateDto),
    Consumer(ConsumerDto),
    Pool(PoolDto),
    Entitlement(EntitlementDto),
}

impl Dto {
    pub fn kind(&self) -> DtoKind {
        match self {
            Dto::Owner(_) => DtoKind::Owner,
            Dto::User(_) => DtoKind::User,
            Dto::CertificateSerial(_) => DtoKind::CertificateSerial,
            Dto::Certificate(_) => DtoKind::Certificate,
            Dto::Consumer(_) => DtoKind::Consumer,
            Dto::Pool(_) => DtoKind::Pool,
            Dto::Entitlement(_) => DtoKind::Entitlement,
        }
    }
}

impl From<OwnerDto> for Dto {
    fn from(dto: OwnerDto) -> Self {
        Dto::Owner(dto)
    }
}

impl From<UserDto> for Dto {
    fn from(dto: UserDto) -> Self {
        Dto::User(dto)
    }
}

impl From<CertificateSerialDto> for Dto {
    fn from(dto: CertificateSerialDto) -> Self {
        Dto::CertificateSerial(dto)
    }
}

impl From<CertificateDto> for Dto {
    fn from(dto: CertificateDto) -> Self {
        Dto::Certificate(dto)
    }
}

impl From<ConsumerDto> for Dto {
    fn from(dto: ConsumerDto) -> Self {
        Dto::Consumer(dto)
    }
}

impl From<PoolDto> for Dto {
    fn from(dto: PoolDto) -> Self {
        Dto::Pool(dto)
    }
}

impl From<EntitlementDto> for Dto {
    fn from(dto: EntitlementDto) -> Self {
        Dto::Entitlement(dto)
    }
}

impl TryFrom<Dto> for OwnerDto {
    type Error = TranslationError;

    fn try_from(dto: Dto) -> Result<Self, Self::Error> {
        match dto {
            Dto::Owner(dto) => Ok(dto),
            _ => Err(TranslationError::InvalidArgument("expected an owner dto")),
        }
    }
}

impl TryFrom<Dto> for UserDto {
    type Error = TranslationError;

    fn try_from(dto: Dto) -> Result<Self, Self::Error> {
        match dto {
            Dto::User(dto) => Ok(dto),
            _ => Err(TranslationError::InvalidArgument("expected a user dto")),
        }
    }
}

impl TryFrom<Dto> for CertificateSerialDto {
    type Error = TranslationError;

    fn try_from(dto: Dto) -> Result<Self, Self::Error> {
        match dto {
            Dto::CertificateSerial(dto) => Ok(dto),
            _ => Err(TranslationError::InvalidArgument(
                "expected a certificate serial dto",
            )),
        }
    }
}

impl TryFrom<Dto> for CertificateDto {
    type Error = TranslationError;

    fn try_from(dto: Dto) -> Result<Self, Self::Error> {
        match dto {
            Dto::Certificate(dto) => Ok(dto),
            _ => Err(TranslationError::InvalidArgument(
                "expected a certificate dto",
            )),
        }
    }
}

impl TryFrom<Dto> for ConsumerDto {
    type Error = TranslationError;

    fn try_from(dto: Dto) -> Result<Self, Self::Error> {
        match dto {
            Dto::Consumer(dto) => Ok(dto),
            _ => Err(TranslationError::InvalidArgument("expected a consumer dto")),
        }
    }
}

impl TryFrom<Dto> for PoolDto {
    type Error = TranslationError;

    fn try_from(dto: Dto) -> Result<Self, Self::Error> {
        match dto {
            Dto::Pool(dto) => Ok(dto),
            _ => Err(TranslationError::InvalidArgument("expected a pool dto")),
        }
    }
}

impl TryFrom<Dto> for EntitlementDto {
    type Error = TranslationError;

    fn try_from(dto: Dto) -> Result<Self, Self::Error> {
        match dto {
            Dto::Entitlement(dto) => Ok(dto),
            _ => Err(TranslationError::InvalidArgument(
                "expected an entitlement dto",
            )),
        }
    }
}
