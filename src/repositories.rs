//! Repositories over the hosted backend.
//!
//! This is the single classification boundary: every [`BackendError`] a
//! client seam returns is classified here, immediately, and surfaces as an
//! [`Outcome`] failure. No raw vendor error escapes past a repository.
//!
//! [`BackendError`]: crate::backend::BackendError
//! [`Outcome`]: crate::error::Outcome

pub mod account;
pub mod notes;

pub use account::{AccountApi, AccountRepository};
pub use notes::{NotesApi, NotesRepository};
