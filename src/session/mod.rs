//! Court session module

mod console;
mod court;
mod outcome;

pub use console::*;
pub use court::*;
pub use outcome::*;
