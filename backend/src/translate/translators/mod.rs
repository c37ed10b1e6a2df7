//! The per-entity field-copy translators.
//!
//! Each file holds one mechanical entity-to-DTO mapping; none of them know
//! about each other. Nested fields go back through the
//! [`TranslationContext`](super::TranslationContext) the facade supplies.

pub mod certificate;
pub mod consumer;
pub mod entitlement;
pub mod owner;
pub mod pool;
pub mod serial;
pub mod user;

pub use certificate::CertificateTranslator;
pub use consumer::ConsumerTranslator;
pub use entitlement::EntitlementTranslator;
pub use owner::OwnerTranslator;
pub use pool::PoolTranslator;
pub use serial::CertificateSerialTranslator;
pub use user::UserTranslator;
