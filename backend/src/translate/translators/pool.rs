//! Pool entity to `PoolDto`.

use chrono::Utc;
use shared::{OwnerDto, PoolDto};

use crate::translate::{
    Dto, DtoKind, EntityKind, EntityRef, EntityTranslator, TranslationContext, TranslationError,
};

pub struct PoolTranslator;

impl EntityTranslator for PoolTranslator {
    fn source_kind(&self) -> EntityKind {
        EntityKind::Pool
    }

    fn target_kind(&self) -> DtoKind {
        DtoKind::Pool
    }

    fn empty_dto(&self) -> Dto {
        Dto::Pool(PoolDto::default())
    }

    fn populate(
        &self,
        ctx: Option<&TranslationContext<'_>>,
        entity: EntityRef<'_>,
        dest: &mut Dto,
    ) -> Result<(), TranslationError> {
        let EntityRef::Pool(pool) = entity else {
            return Err(TranslationError::InvalidArgument(
                "pool translator requires a pool entity",
            ));
        };
        let Dto::Pool(dto) = dest else {
            return Err(TranslationError::InvalidArgument(
                "pool translator requires a pool dto destination",
            ));
        };

        dto.id = pool.id.clone();
        dto.product_id = pool.product_id.clone();
        dto.product_name = pool.product_name.clone();
        dto.quantity = pool.quantity.unwrap_or(0);
        dto.consumed = pool.consumed.unwrap_or(0);
        dto.start_date = pool.start_date.map(|t| t.with_timezone(&Utc));
        dto.end_date = pool.end_date.map(|t| t.with_timezone(&Utc));
        dto.created = pool.created.map(|t| t.with_timezone(&Utc));
        dto.updated = pool.updated.map(|t| t.with_timezone(&Utc));

        dto.owner = match ctx {
            Some(ctx) => ctx.translate_as::<_, OwnerDto>(pool.owner.as_ref())?,
            None => None,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Owner, Pool};
    use crate::translate::ModelTranslator;
    use chrono::TimeZone;

    fn sample_pool() -> Pool {
        Pool {
            id: "pool::1".to_string(),
            owner: Some(Owner {
                id: "owner::1".to_string(),
                key: "acme".to_string(),
                display_name: "Acme Corp".to_string(),
                parent_owner: None,
                content_access_mode: None,
                auto_bind_disabled: None,
                created: None,
                updated: None,
            }),
            product_id: "RH00001".to_string(),
            product_name: Some("Premium Subscription".to_string()),
            quantity: Some(100),
            consumed: Some(37),
            start_date: Some(
                Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
                    .unwrap()
                    .fixed_offset(),
            ),
            end_date: Some(
                Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59)
                    .unwrap()
                    .fixed_offset(),
            ),
            created: None,
            updated: None,
        }
    }

    #[test]
    fn test_scalar_fidelity() {
        let pool = sample_pool();
        let dto = PoolTranslator
            .translate(None, Some(EntityRef::from(&pool)))
            .unwrap()
            .unwrap();
        let Dto::Pool(dto) = dto else {
            panic!("expected a pool dto");
        };

        assert_eq!(dto.id, "pool::1");
        assert_eq!(dto.product_id, "RH00001");
        assert_eq!(dto.product_name.as_deref(), Some("Premium Subscription"));
        assert_eq!(dto.quantity, 100);
        assert_eq!(dto.consumed, 37);
        assert_eq!(
            dto.start_date,
            Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_absent_counts_default_to_zero() {
        let mut pool = sample_pool();
        pool.quantity = None;
        pool.consumed = None;

        let dto = PoolTranslator
            .translate(None, Some(EntityRef::from(&pool)))
            .unwrap()
            .unwrap();
        let Dto::Pool(dto) = dto else {
            panic!("expected a pool dto");
        };
        assert_eq!(dto.quantity, 0);
        assert_eq!(dto.consumed, 0);
    }

    #[test]
    fn test_owner_translates_through_context() {
        let pool = sample_pool();
        let translator = ModelTranslator::standard();

        let dto: PoolDto = translator.translate_as(Some(&pool)).unwrap().unwrap();
        assert_eq!(dto.owner.unwrap().key, "acme");
    }
}
