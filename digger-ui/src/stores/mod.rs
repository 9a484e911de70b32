//! Store types for curation session state
//!
//! Keyed, inspectable state the list views layer over fetched data: per-item
//! mutation status, the one-way review gate, session notices, and the crawl
//! form. Stores are written only by their own transition methods and read
//! for composition.

pub mod crawler;
pub mod curation;
pub mod notices;

pub use crawler::*;
pub use curation::*;
pub use notices::*;
