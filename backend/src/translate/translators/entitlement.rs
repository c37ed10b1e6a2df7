//! Entitlement entity to `EntitlementDto`.

use chrono::Utc;
use shared::{EntitlementDto, OwnerDto, PoolDto};

use crate::translate::{
    Dto, DtoKind, EntityKind, EntityRef, EntityTranslator, TranslationContext, TranslationError,
};

pub struct EntitlementTranslator;

impl EntityTranslator for EntitlementTranslator {
    fn source_kind(&self) -> EntityKind {
        EntityKind::Entitlement
    }

    fn target_kind(&self) -> DtoKind {
        DtoKind::Entitlement
    }

    fn empty_dto(&self) -> Dto {
        Dto::Entitlement(EntitlementDto::default())
    }

    fn populate(
        &self,
        ctx: Option<&TranslationContext<'_>>,
        entity: EntityRef<'_>,
        dest: &mut Dto,
    ) -> Result<(), TranslationError> {
        let EntityRef::Entitlement(entitlement) = entity else {
            return Err(TranslationError::InvalidArgument(
                "entitlement translator requires an entitlement entity",
            ));
        };
        let Dto::Entitlement(dto) = dest else {
            return Err(TranslationError::InvalidArgument(
                "entitlement translator requires an entitlement dto destination",
            ));
        };

        dto.id = entitlement.id.clone();
        dto.quantity = entitlement.quantity.unwrap_or(0);
        dto.created = entitlement.created.map(|t| t.with_timezone(&Utc));
        dto.updated = entitlement.updated.map(|t| t.with_timezone(&Utc));

        match ctx {
            Some(ctx) => {
                dto.owner = ctx.translate_as::<_, OwnerDto>(entitlement.owner.as_ref())?;
                let pool: Option<PoolDto> = ctx.translate_as(entitlement.pool.as_deref())?;
                dto.pool = pool.map(Box::new);
            }
            None => {
                dto.owner = None;
                dto.pool = None;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Entitlement, Owner, Pool};
    use crate::translate::ModelTranslator;

    fn sample_owner() -> Owner {
        Owner {
            id: "owner::1".to_string(),
            key: "acme".to_string(),
            display_name: "Acme Corp".to_string(),
            parent_owner: None,
            content_access_mode: None,
            auto_bind_disabled: None,
            created: None,
            updated: None,
        }
    }

    fn sample_entitlement() -> Entitlement {
        Entitlement {
            id: "ent::1".to_string(),
            owner: Some(sample_owner()),
            pool: Some(Box::new(Pool {
                id: "pool::1".to_string(),
                owner: Some(sample_owner()),
                product_id: "RH00001".to_string(),
                product_name: None,
                quantity: Some(100),
                consumed: Some(37),
                start_date: None,
                end_date: None,
                created: None,
                updated: None,
            })),
            quantity: Some(2),
            created: None,
            updated: None,
        }
    }

    #[test]
    fn test_depth_three_graph_translates_fully() {
        // entitlement -> pool -> owner: three levels through the context.
        let entitlement = sample_entitlement();
        let translator = ModelTranslator::standard();

        let dto: EntitlementDto = translator.translate_as(Some(&entitlement)).unwrap().unwrap();
        assert_eq!(dto.id, "ent::1");
        assert_eq!(dto.quantity, 2);

        let pool = dto.pool.unwrap();
        assert_eq!(pool.id, "pool::1");
        assert_eq!(pool.owner.as_ref().unwrap().key, "acme");
        assert_eq!(dto.owner.unwrap().key, "acme");
    }

    #[test]
    fn test_nested_fields_omitted_without_context() {
        let entitlement = sample_entitlement();
        let dto = EntitlementTranslator
            .translate(None, Some(EntityRef::from(&entitlement)))
            .unwrap()
            .unwrap();
        let Dto::Entitlement(dto) = dto else {
            panic!("expected an entitlement dto");
        };

        assert_eq!(dto.id, "ent::1");
        assert!(dto.owner.is_none());
        assert!(dto.pool.is_none());
    }
}
