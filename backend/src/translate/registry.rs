//! Lookup table from entity kind to translator.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, warn};

use super::{error::TranslationError, kinds::EntityKind, translator::EntityTranslator};

/// Maps each [`EntityKind`] to the one translator responsible for it.
///
/// The registry is populated before the facade is shared and read-only
/// afterwards, so `resolve` takes `&self` and needs no locking; all
/// registration happens-before any concurrent resolution. It owns its
/// translators and nothing else - entities and DTOs always belong to the
/// caller.
#[derive(Default)]
pub struct TranslatorRegistry {
    translators: HashMap<EntityKind, Arc<dyn EntityTranslator>>,
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a translator under its `source_kind`. Later registrations
    /// for the same kind win; the displaced translator is returned so the
    /// caller can tell a replacement happened.
    pub fn register(
        &mut self,
        translator: Arc<dyn EntityTranslator>,
    ) -> Option<Arc<dyn EntityTranslator>> {
        let kind = translator.source_kind();
        let produces = translator.target_kind();
        let replaced = self.translators.insert(kind, translator);
        if replaced.is_some() {
            warn!(kind = %kind, "replacing previously registered translator");
        } else {
            debug!(kind = %kind, produces = %produces, "registered translator");
        }
        replaced
    }

    /// Look up the translator for an entity kind. A miss is a
    /// configuration gap, not bad input, and is logged loudly.
    pub fn resolve(&self, kind: EntityKind) -> Result<&dyn EntityTranslator, TranslationError> {
        match self.translators.get(&kind) {
            Some(translator) => Ok(translator.as_ref()),
            None => {
                error!(kind = %kind, "no translator registered for entity kind");
                Err(TranslationError::NotFound(kind))
            }
        }
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.translators.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    /// The kinds currently registered, for inspection and startup checks.
    pub fn registered_kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.translators.keys().copied()
    }
}
