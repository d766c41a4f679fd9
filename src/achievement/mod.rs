//! Achievement tracking module

mod checker;
mod kind;

pub use checker::*;
pub use kind::*;
