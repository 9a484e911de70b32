//! digger-core - backend access for the digger curation app
//!
//! Talks to the catalog crawler's REST backend: the typed wire model, the
//! `CatalogApi` collaborator trait, the reqwest-backed client, and the app
//! configuration.

pub mod catalog;
pub mod catalog_client;
pub mod config;

pub use catalog::*;
pub use catalog_client::CatalogClient;
pub use config::{Config, ConfigError};
