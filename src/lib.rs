pub mod backend;
pub mod entities;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod presentation;
pub mod repositories;

#[cfg(test)]
mod tests;

pub use error::{Failure, FailureCategory, Outcome};
