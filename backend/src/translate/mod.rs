//! Entity-to-DTO translation layer.
//!
//! Converts persistence-shaped entities into the API-facing DTOs from the
//! `shared` crate. Dispatch works off an explicit kind tag: every entity
//! variant maps to an [`EntityKind`], a [`TranslatorRegistry`] maps kinds to
//! [`EntityTranslator`] implementations, and the [`ModelTranslator`] facade
//! resolves and invokes the right one. Translators receive the facade back
//! as a [`TranslationContext`] so nested entity fields can be translated
//! recursively without any translator knowing about any other.
//!
//! Translation is pure computation: no I/O, no shared mutable state, safe
//! to run concurrently against a shared facade.

pub mod dto;
pub mod entity;
pub mod error;
pub mod facade;
pub mod kinds;
pub mod registry;
pub mod translator;
pub mod translators;

pub use dto::Dto;
pub use entity::EntityRef;
pub use error::TranslationError;
pub use facade::{ModelTranslator, TranslationContext, DEFAULT_MAX_DEPTH};
pub use kinds::{DtoKind, EntityKind};
pub use registry::TranslatorRegistry;
pub use translator::EntityTranslator;
