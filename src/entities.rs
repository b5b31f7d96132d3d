//! Domain entities exchanged with the hosted backend.

pub mod account;
pub mod notes;
