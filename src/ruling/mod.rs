//! Ruling generation module

mod judge;
pub mod selector;
pub mod templates;


pub use judge::*;
pub use selector::*;
