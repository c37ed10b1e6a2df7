//! User entity to `UserDto`, and the credential-bearing reverse path.

use chrono::Utc;
use shared::UserDto;

use crate::domain::models::User;
use crate::translate::{
    Dto, DtoKind, EntityKind, EntityRef, EntityTranslator, TranslationContext, TranslationError,
};

pub struct UserTranslator;

impl UserTranslator {
    /// Build a user entity from an intake DTO. The one direction that runs
    /// DTO-to-entity: raw credential material is hashed here and the raw
    /// value goes no further.
    pub fn build_entity(&self, dto: &UserDto) -> User {
        let now = Utc::now().fixed_offset();
        User {
            id: if dto.id.is_empty() {
                User::generate_id()
            } else {
                dto.id.clone()
            },
            username: dto.username.clone(),
            hashed_password: dto.password.as_deref().map(User::hash_password),
            super_admin: Some(dto.super_admin),
            created: Some(now),
            updated: Some(now),
        }
    }
}

impl EntityTranslator for UserTranslator {
    fn source_kind(&self) -> EntityKind {
        EntityKind::User
    }

    fn target_kind(&self) -> DtoKind {
        DtoKind::User
    }

    fn empty_dto(&self) -> Dto {
        Dto::User(UserDto::default())
    }

    fn populate(
        &self,
        _ctx: Option<&TranslationContext<'_>>,
        entity: EntityRef<'_>,
        dest: &mut Dto,
    ) -> Result<(), TranslationError> {
        let EntityRef::User(user) = entity else {
            return Err(TranslationError::InvalidArgument(
                "user translator requires a user entity",
            ));
        };
        let Dto::User(dto) = dest else {
            return Err(TranslationError::InvalidArgument(
                "user translator requires a user dto destination",
            ));
        };

        dto.id = user.id.clone();
        dto.username = user.username.clone();
        // Credentials are one-way: the stored hash never reaches a client.
        dto.password = None;
        dto.super_admin = user.super_admin.unwrap_or(false);
        dto.created = user.created.map(|t| t.with_timezone(&Utc));
        dto.updated = user.updated.map(|t| t.with_timezone(&Utc));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn alice() -> User {
        User {
            id: "user::alice".to_string(),
            username: "alice".to_string(),
            hashed_password: Some("abc123".to_string()),
            super_admin: Some(true),
            created: Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap().fixed_offset()),
            updated: None,
        }
    }

    #[test]
    fn test_password_is_never_echoed() {
        let user = alice();
        let dto = UserTranslator
            .translate(None, Some(EntityRef::from(&user)))
            .unwrap()
            .unwrap();
        let Dto::User(dto) = dto else {
            panic!("expected a user dto");
        };

        assert_eq!(dto.username, "alice");
        assert_eq!(dto.password, None);
        assert!(dto.super_admin);
        assert_eq!(
            dto.created,
            Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_password_stays_hidden_in_updated_destination() {
        // Update-in-place: even a destination that arrives with a password
        // set leaves populate with it cleared.
        let user = alice();
        let mut dest = Dto::User(UserDto {
            password: Some("stale".to_string()),
            ..UserDto::default()
        });
        UserTranslator
            .populate(None, EntityRef::from(&user), &mut dest)
            .unwrap();
        let Dto::User(dto) = dest else {
            panic!("expected a user dto");
        };
        assert_eq!(dto.password, None);
    }

    #[test]
    fn test_absent_super_admin_defaults_to_false() {
        let mut user = alice();
        user.super_admin = None;
        let dto = UserTranslator
            .translate(None, Some(EntityRef::from(&user)))
            .unwrap()
            .unwrap();
        let Dto::User(dto) = dto else {
            panic!("expected a user dto");
        };
        assert!(!dto.super_admin);
    }

    #[test]
    fn test_build_entity_hashes_the_raw_password() {
        let dto = UserDto {
            id: String::new(),
            username: "bob".to_string(),
            password: Some("hunter2".to_string()),
            super_admin: false,
            created: None,
            updated: None,
        };

        let entity = UserTranslator.build_entity(&dto);
        assert!(entity.id.starts_with("user::"));
        assert_eq!(entity.username, "bob");
        assert_eq!(
            entity.hashed_password.as_deref(),
            Some(User::hash_password("hunter2").as_str())
        );
        assert_ne!(entity.hashed_password.as_deref(), Some("hunter2"));
        assert_eq!(entity.super_admin, Some(false));
    }

    #[test]
    fn test_build_entity_without_password_stores_none() {
        let dto = UserDto {
            id: "user::existing".to_string(),
            username: "bob".to_string(),
            password: None,
            super_admin: true,
            created: None,
            updated: None,
        };

        let entity = UserTranslator.build_entity(&dto);
        assert_eq!(entity.id, "user::existing");
        assert_eq!(entity.hashed_password, None);
    }
}
