//! How a court session ends, and what the Court says on the way out

use super::console::Adjournment;
use crate::error::{CourtError, Result};
use tokio::task::JoinError;

/// Printed when the session is interrupted with Ctrl-C
pub const FAREWELL: &str = "\nThe Court is abruptly dismissed. Farewell!";

/// Final state of a session
#[derive(Debug)]
pub enum Outcome {
    Adjourned(Adjournment),
    Interrupted,
    Fault(CourtError),
}

impl Outcome {
    /// Map a joined session task to its outcome
    pub fn settle(joined: std::result::Result<Result<Adjournment>, JoinError>) -> Self {
        match joined {
            Ok(Ok(adjournment)) => Outcome::Adjourned(adjournment),
            Ok(Err(err)) => Outcome::Fault(err),
            Err(err) if err.is_panic() => Outcome::Fault(CourtError::SessionAborted(
                "the session thread panicked".to_string(),
            )),
            Err(err) => Outcome::Fault(CourtError::SessionAborted(err.to_string())),
        }
    }

    /// Text printed after the session ends, if any
    ///
    /// A normal adjournment has already said goodbye from the console.
    pub fn closing_message(&self) -> Option<String> {
        match self {
            Outcome::Adjourned(_) => None,
            Outcome::Interrupted => Some(FAREWELL.to_string()),
            Outcome::Fault(err) => Some(format!("\nCosmic error in the Court: {}", err)),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Fault(_))
    }
}
