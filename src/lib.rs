//! Cosmic Court - the Court of Cosmic Justice
//!
//! A text-adventure courtroom: complaints are classified by keyword into a
//! category and severity, then Judge AstraLex delivers a templated ruling in
//! the voice of a persona drawn at the start of the session.
//!
//! ```no_run
//! use cosmic_court::config::CourtConfig;
//! use cosmic_court::session::Court;
//!
//! let mut court = Court::open(&CourtConfig::default(), None, Some(42))?;
//! let hearing = court.hear("my neighbor stole my cow")?;
//! println!("{}", hearing.ruling);
//! # Ok::<(), cosmic_court::error::CourtError>(())
//! ```

pub mod achievement;
pub mod classifier;
pub mod config;
pub mod error;
pub mod record;
pub mod ruling;
pub mod session;

pub use crate::classifier::{Classification, Classifier, Severity};
pub use crate::config::{Category, CourtConfig, Tone};
pub use crate::error::{CourtError, Result};
pub use crate::ruling::{Judge, Ruling};
pub use crate::session::{Console, Court};
