//! Domain layer: persistence-shaped entity models.

pub mod models;
