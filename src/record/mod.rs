//! Case and player records

mod case;
mod player;

#[cfg(test)]
mod property_tests;

pub use case::*;
pub use player::*;
