//! Test modules for the crate



#[cfg(test)]
mod classify_tests;



#[cfg(test)]
mod repository_tests;

#[cfg(test)]
pub mod support;
