//! Client side of the Open Library search service.
//!
//! The [`CatalogClient`] trait is the seam the search session talks through;
//! [`OpenLibraryClient`] is the reqwest-backed implementation.

mod client;
mod error;
mod open_library;
mod query;

pub use self::client::CatalogClient;
pub use self::error::{CatalogError, Result};
pub use self::open_library::{DEFAULT_BASE_URL, OpenLibraryClient};
pub use self::query::SearchQuery;
