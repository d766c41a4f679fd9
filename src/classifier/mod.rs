//! Complaint classification module

mod analyzer;
pub mod cache;
mod severity;

#[cfg(test)]
mod property_tests;

pub use analyzer::*;
pub use severity::*;
