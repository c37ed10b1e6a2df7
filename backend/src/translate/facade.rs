//! Dispatch facade: the entry point callers and translators share.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{
    dto::Dto,
    entity::EntityRef,
    error::TranslationError,
    registry::TranslatorRegistry,
    translators::{
        CertificateSerialTranslator, CertificateTranslator, ConsumerTranslator,
        EntitlementTranslator, OwnerTranslator, PoolTranslator, UserTranslator,
    },
};

/// Default bound on entity-graph nesting. Real graphs are trees a handful
/// of levels deep; anything past this is a reference cycle.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Resolves the translator for an entity's kind and invokes it, handing
/// itself back in as a [`TranslationContext`] so nested fields translate
/// recursively. Stateless across calls: concurrent translations through a
/// shared facade never interfere.
pub struct ModelTranslator {
    registry: TranslatorRegistry,
    max_depth: usize,
}

impl ModelTranslator {
    pub fn new(registry: TranslatorRegistry) -> Self {
        Self::with_max_depth(registry, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(registry: TranslatorRegistry, max_depth: usize) -> Self {
        Self {
            registry,
            max_depth,
        }
    }

    /// A facade with every built-in translator registered.
    pub fn standard() -> Self {
        let mut registry = TranslatorRegistry::new();
        registry.register(Arc::new(OwnerTranslator));
        registry.register(Arc::new(UserTranslator));
        registry.register(Arc::new(CertificateSerialTranslator));
        registry.register(Arc::new(CertificateTranslator));
        registry.register(Arc::new(ConsumerTranslator));
        registry.register(Arc::new(PoolTranslator));
        registry.register(Arc::new(EntitlementTranslator));
        Self::new(registry)
    }

    /// The process-wide standard facade, built once on first use and
    /// read-only from then on.
    pub fn global() -> &'static ModelTranslator {
        static STANDARD: Lazy<ModelTranslator> = Lazy::new(ModelTranslator::standard);
        &STANDARD
    }

    pub fn registry(&self) -> &TranslatorRegistry {
        &self.registry
    }

    /// Translate any entity with an `EntityRef` conversion. An absent
    /// entity maps to an absent result - "relationship not set" is not an
    /// error at the top of a call.
    pub fn translate<'a, E>(&self, entity: Option<&'a E>) -> Result<Option<Dto>, TranslationError>
    where
        EntityRef<'a>: From<&'a E>,
    {
        self.translate_ref(entity.map(EntityRef::from))
    }

    /// Runtime-variant form of [`translate`](Self::translate), for callers
    /// that already hold a tagged reference.
    pub fn translate_ref(
        &self,
        entity: Option<EntityRef<'_>>,
    ) -> Result<Option<Dto>, TranslationError> {
        self.translate_at_depth(entity, 0)
    }

    /// Statically-typed form: translate and unwrap to the destination DTO
    /// type. Fails with `InvalidArgument` if the registered translator
    /// produced a different variant than the caller expects.
    pub fn translate_as<'a, E, D>(
        &self,
        entity: Option<&'a E>,
    ) -> Result<Option<D>, TranslationError>
    where
        EntityRef<'a>: From<&'a E>,
        D: TryFrom<Dto, Error = TranslationError>,
    {
        match self.translate(entity)? {
            Some(dto) => Ok(Some(D::try_from(dto)?)),
            None => Ok(None),
        }
    }

    fn translate_at_depth(
        &self,
        entity: Option<EntityRef<'_>>,
        depth: usize,
    ) -> Result<Option<Dto>, TranslationError> {
        let Some(entity) = entity else {
            return Ok(None);
        };
        if depth >= self.max_depth {
            return Err(TranslationError::DepthExceeded {
                max_depth: self.max_depth,
            });
        }
        let translator = self.registry.resolve(entity.kind())?;
        let ctx = TranslationContext {
            facade: self,
            depth,
        };
        translator.translate(Some(&ctx), Some(entity))
    }
}

/// Handle a translator receives so it can resolve nested entity fields
/// back through the facade. Carries the recursion depth; each nested hop
/// counts toward the facade's depth bound.
pub struct TranslationContext<'a> {
    facade: &'a ModelTranslator,
    depth: usize,
}

impl TranslationContext<'_> {
    /// Translate a nested entity field. Same absent-in, absent-out
    /// contract as the facade.
    pub fn translate_ref(
        &self,
        entity: Option<EntityRef<'_>>,
    ) -> Result<Option<Dto>, TranslationError> {
        self.facade.translate_at_depth(entity, self.depth + 1)
    }

    /// Typed nested translation; the common call inside `populate`.
    pub fn translate_as<'e, E, D>(
        &self,
        entity: Option<&'e E>,
    ) -> Result<Option<D>, TranslationError>
    where
        EntityRef<'e>: From<&'e E>,
        D: TryFrom<Dto, Error = TranslationError>,
    {
        match self.translate_ref(entity.map(EntityRef::from))? {
            Some(dto) => Ok(Some(D::try_from(dto)?)),
            None => Ok(None),
        }
    }

    /// How deep in the entity graph this context sits (0 at the top).
    pub fn depth(&self) -> usize {
        self.depth
    }
}
