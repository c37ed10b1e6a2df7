//! Owner entity to `OwnerDto`.

use chrono::Utc;
use shared::OwnerDto;

use crate::translate::{
    Dto, DtoKind, EntityKind, EntityRef, EntityTranslator, TranslationContext, TranslationError,
};

pub struct OwnerTranslator;

impl EntityTranslator for OwnerTranslator {
    fn source_kind(&self) -> EntityKind {
        EntityKind::Owner
    }

    fn target_kind(&self) -> DtoKind {
        DtoKind::Owner
    }

    fn empty_dto(&self) -> Dto {
        Dto::Owner(OwnerDto::default())
    }

    fn populate(
        &self,
        ctx: Option<&TranslationContext<'_>>,
        entity: EntityRef<'_>,
        dest: &mut Dto,
    ) -> Result<(), TranslationError> {
        let EntityRef::Owner(owner) = entity else {
            return Err(TranslationError::InvalidArgument(
                "owner translator requires an owner entity",
            ));
        };
        let Dto::Owner(dto) = dest else {
            return Err(TranslationError::InvalidArgument(
                "owner translator requires an owner dto destination",
            ));
        };

        dto.id = owner.id.clone();
        dto.key = owner.key.clone();
        dto.display_name = owner.display_name.clone();
        dto.href = Some(format!("/owners/{}", owner.key));
        dto.content_access_mode = owner.content_access_mode.clone();
        dto.auto_bind_disabled = owner.auto_bind_disabled.unwrap_or(false);
        dto.created = owner.created.map(|t| t.with_timezone(&Utc));
        dto.updated = owner.updated.map(|t| t.with_timezone(&Utc));

        dto.parent_owner = match ctx {
            Some(ctx) => {
                let parent: Option<OwnerDto> = ctx.translate_as(owner.parent_owner.as_deref())?;
                parent.map(Box::new)
            }
            None => None,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Owner;
    use crate::translate::ModelTranslator;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn sample_owner() -> Owner {
        // Stored with a +02:00 offset; the DTO must come out in UTC.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        Owner {
            id: "owner::1".to_string(),
            key: "acme".to_string(),
            display_name: "Acme Corp".to_string(),
            parent_owner: None,
            content_access_mode: Some("org_environment".to_string()),
            auto_bind_disabled: None,
            created: Some(tz.with_ymd_and_hms(2021, 6, 1, 14, 0, 0).unwrap()),
            updated: Some(tz.with_ymd_and_hms(2021, 6, 2, 9, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_scalar_fields_copy_faithfully() {
        let owner = sample_owner();
        let dto = OwnerTranslator
            .translate(None, Some(EntityRef::from(&owner)))
            .unwrap()
            .unwrap();
        let Dto::Owner(dto) = dto else {
            panic!("expected an owner dto");
        };

        assert_eq!(dto.id, "owner::1");
        assert_eq!(dto.key, "acme");
        assert_eq!(dto.display_name, "Acme Corp");
        assert_eq!(dto.href.as_deref(), Some("/owners/acme"));
        assert_eq!(dto.content_access_mode.as_deref(), Some("org_environment"));
    }

    #[test]
    fn test_timestamps_normalize_to_utc() {
        let owner = sample_owner();
        let dto = OwnerTranslator
            .translate(None, Some(EntityRef::from(&owner)))
            .unwrap()
            .unwrap();
        let Dto::Owner(dto) = dto else {
            panic!("expected an owner dto");
        };

        // 14:00 at +02:00 is 12:00 UTC.
        assert_eq!(
            dto.created,
            Some(Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(
            dto.updated,
            Some(Utc.with_ymd_and_hms(2021, 6, 2, 7, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_absent_boolean_defaults_to_false() {
        let owner = sample_owner();
        assert!(owner.auto_bind_disabled.is_none());

        let dto = OwnerTranslator
            .translate(None, Some(EntityRef::from(&owner)))
            .unwrap()
            .unwrap();
        let Dto::Owner(dto) = dto else {
            panic!("expected an owner dto");
        };
        assert!(!dto.auto_bind_disabled);
    }

    #[test]
    fn test_parent_owner_requires_a_context() {
        let mut owner = sample_owner();
        owner.parent_owner = Some(Box::new(Owner {
            id: "owner::0".to_string(),
            key: "root".to_string(),
            display_name: "Root".to_string(),
            parent_owner: None,
            content_access_mode: None,
            auto_bind_disabled: None,
            created: None,
            updated: None,
        }));

        // No context: the nested field is omitted, not an error.
        let dto = OwnerTranslator
            .translate(None, Some(EntityRef::from(&owner)))
            .unwrap()
            .unwrap();
        let Dto::Owner(dto) = dto else {
            panic!("expected an owner dto");
        };
        assert!(dto.parent_owner.is_none());

        // Through the facade a context is supplied and the parent appears.
        let translator = ModelTranslator::standard();
        let dto: shared::OwnerDto = translator.translate_as(Some(&owner)).unwrap().unwrap();
        let parent = dto.parent_owner.unwrap();
        assert_eq!(parent.key, "root");
        assert_eq!(parent.href.as_deref(), Some("/owners/root"));
    }

    #[test]
    fn test_absent_source_is_absent_result() {
        let result = OwnerTranslator.translate(None, None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_populate_rejects_wrong_source_variant() {
        let user = crate::domain::models::User {
            id: "user::1".to_string(),
            username: "alice".to_string(),
            hashed_password: None,
            super_admin: None,
            created: None,
            updated: None,
        };
        let mut dest = OwnerTranslator.empty_dto();
        let result = OwnerTranslator.populate(None, EntityRef::from(&user), &mut dest);
        assert!(matches!(
            result,
            Err(TranslationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_populate_rejects_wrong_destination_variant() {
        let owner = sample_owner();
        let mut dest = Dto::User(shared::UserDto::default());
        let result = OwnerTranslator.populate(None, EntityRef::from(&owner), &mut dest);
        assert!(matches!(
            result,
            Err(TranslationError::InvalidArgument(_))
        ));
    }
}
