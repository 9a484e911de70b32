//! digger-ui - Headless view state for the digger curation app
//!
//! Contains display types, the paging/capability calculators, the keyed
//! curation state machines, and the session driver that ties them to a
//! `CatalogApi`. No rendering happens here; a frontend consumes the
//! composed views as plain data.

pub mod capabilities;
pub mod composer;
pub mod display_types;
pub mod paging;
pub mod session;
pub mod stores;

pub use capabilities::*;
pub use composer::*;
pub use display_types::*;
pub use paging::*;
pub use session::*;
pub use stores::*;
