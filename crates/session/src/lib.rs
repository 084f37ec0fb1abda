//! Request lifecycle of a BookVerse search front end.
//!
//! [`SearchSession`] turns query, page and view mode changes into catalog
//! requests and folds their responses into a [`SearchState`].

mod session;
mod state;

pub use self::session::SearchSession;
pub use self::state::{RequestOutcome, SearchState};
