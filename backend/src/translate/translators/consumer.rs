//! Consumer entity to `ConsumerDto`.

use chrono::Utc;
use shared::{ConsumerDto, OwnerDto};

use crate::translate::{
    Dto, DtoKind, EntityKind, EntityRef, EntityTranslator, TranslationContext, TranslationError,
};

pub struct ConsumerTranslator;

impl EntityTranslator for ConsumerTranslator {
    fn source_kind(&self) -> EntityKind {
        EntityKind::Consumer
    }

    fn target_kind(&self) -> DtoKind {
        DtoKind::Consumer
    }

    fn empty_dto(&self) -> Dto {
        Dto::Consumer(ConsumerDto::default())
    }

    fn populate(
        &self,
        ctx: Option<&TranslationContext<'_>>,
        entity: EntityRef<'_>,
        dest: &mut Dto,
    ) -> Result<(), TranslationError> {
        let EntityRef::Consumer(consumer) = entity else {
            return Err(TranslationError::InvalidArgument(
                "consumer translator requires a consumer entity",
            ));
        };
        let Dto::Consumer(dto) = dest else {
            return Err(TranslationError::InvalidArgument(
                "consumer translator requires a consumer dto destination",
            ));
        };

        dto.id = consumer.id.clone();
        dto.uuid = consumer.uuid.clone();
        dto.name = consumer.name.clone();
        dto.href = Some(format!("/consumers/{}", consumer.uuid));
        dto.last_checkin = consumer.last_checkin.map(|t| t.with_timezone(&Utc));
        dto.entitlement_count = consumer.entitlement_count.unwrap_or(0);
        dto.created = consumer.created.map(|t| t.with_timezone(&Utc));
        dto.updated = consumer.updated.map(|t| t.with_timezone(&Utc));

        dto.owner = match ctx {
            Some(ctx) => ctx.translate_as::<_, OwnerDto>(consumer.owner.as_ref())?,
            None => None,
        };
        Ok(())
    }
}
