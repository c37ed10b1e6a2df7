//! Certificate-serial entity to `CertificateSerialDto`.

use chrono::Utc;
use shared::CertificateSerialDto;

use crate::translate::{
    Dto, DtoKind, EntityKind, EntityRef, EntityTranslator, TranslationContext, TranslationError,
};

pub struct CertificateSerialTranslator;

impl EntityTranslator for CertificateSerialTranslator {
    fn source_kind(&self) -> EntityKind {
        EntityKind::CertificateSerial
    }

    fn target_kind(&self) -> DtoKind {
        DtoKind::CertificateSerial
    }

    fn empty_dto(&self) -> Dto {
        Dto::CertificateSerial(CertificateSerialDto::default())
    }

    fn populate(
        &self,
        _ctx: Option<&TranslationContext<'_>>,
        entity: EntityRef<'_>,
        dest: &mut Dto,
    ) -> Result<(), TranslationError> {
        let EntityRef::CertificateSerial(serial) = entity else {
            return Err(TranslationError::InvalidArgument(
                "serial translator requires a certificate serial entity",
            ));
        };
        let Dto::CertificateSerial(dto) = dest else {
            return Err(TranslationError::InvalidArgument(
                "serial translator requires a certificate serial dto destination",
            ));
        };

        dto.id = serial.id.clone();
        dto.serial = serial.serial;
        dto.expiration = serial.expiration.map(|t| t.with_timezone(&Utc));
        dto.revoked = serial.revoked.unwrap_or(false);
        dto.created = serial.created.map(|t| t.with_timezone(&Utc));
        dto.updated = serial.updated.map(|t| t.with_timezone(&Utc));
        Ok(())
    }
}
