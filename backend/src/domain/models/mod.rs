//! Entity models as the storage layer produces them.
//!
//! Nullable columns are `Option`; timestamps are `DateTime<FixedOffset>`
//! and keep whatever offset was stored. The translation layer owns the
//! normalization to UTC.

pub mod certificate;
pub mod consumer;
pub mod entitlement;
pub mod owner;
pub mod pool;
pub mod user;

pub use certificate::{Certificate, CertificateSerial};
pub use consumer::Consumer;
pub use entitlement::Entitlement;
pub use owner::Owner;
pub use pool::Pool;
pub use user::User;
