//! The translator capability: one implementation per entity variant.

use super::{
    dto::Dto,
    entity::EntityRef,
    error::TranslationError,
    facade::TranslationContext,
    kinds::{DtoKind, EntityKind},
};

/// Converts one entity variant into its DTO.
///
/// Implementations are stateless field-copy machines. The contract:
///
/// - never mutate the source entity, never perform I/O;
/// - normalize timestamps to UTC at the boundary;
/// - default absent boolean flags to `false` rather than propagating
///   absence;
/// - never copy credential material into an outgoing DTO;
/// - translate nested entity fields through the context when one is
///   supplied, and leave them absent when it is not.
pub trait EntityTranslator: Send + Sync {
    /// The entity variant this translator handles; the registry keys on it.
    fn source_kind(&self) -> EntityKind;

    /// The DTO variant this translator produces.
    fn target_kind(&self) -> DtoKind;

    /// Allocate an empty destination DTO of the target kind.
    fn empty_dto(&self) -> Dto;

    /// Copy the entity's fields into a caller-supplied destination. This is
    /// the one place field-mapping logic lives; update-in-place flows call
    /// it directly with a DTO they already hold.
    ///
    /// Fails with [`TranslationError::InvalidArgument`] when `entity` or
    /// `dest` is not the variant this translator handles.
    fn populate(
        &self,
        ctx: Option<&TranslationContext<'_>>,
        entity: EntityRef<'_>,
        dest: &mut Dto,
    ) -> Result<(), TranslationError>;

    /// Translate into a freshly allocated DTO. An absent source is not an
    /// error: "no entity" propagates as "no DTO".
    fn translate(
        &self,
        ctx: Option<&TranslationContext<'_>>,
        entity: Option<EntityRef<'_>>,
    ) -> Result<Option<Dto>, TranslationError> {
        let Some(entity) = entity else {
            return Ok(None);
        };
        let mut dto = self.empty_dto();
        self.populate(ctx, entity, &mut dto)?;
        Ok(Some(dto))
    }
}
