//! Entitlement tracker backend: domain models and the entity-to-DTO
//! translation layer.
//!
//! The domain models in [`domain`] are persistence-shaped: nullable columns
//! are `Option`, timestamps keep whatever offset the storage layer loaded.
//! The [`translate`] module converts them into the API-facing DTOs defined
//! in the `shared` crate, normalizing timestamps to UTC and hiding
//! credential material on the way out.

pub mod domain;
pub mod translate;

pub use translate::{
    Dto, DtoKind, EntityKind, EntityRef, EntityTranslator, ModelTranslator, TranslationContext,
    TranslationError, TranslatorRegistry,
};
