//! Severity score newtype

use std::fmt;

/// How harsh a ruling should be, always within 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(u8);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Build a severity from a raw score, clamping into range
    #[inline]
    pub fn new(raw: u32) -> Self {
        Self(raw.clamp(Self::MIN as u32, Self::MAX as u32) as u8)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// One step harsher, saturating at the maximum
    #[inline]
    pub fn escalated(self) -> Self {
        Self::new(self.0 as u32 + 1)
    }

    /// Whether the heavier penalty tier applies at the given threshold
    #[inline]
    pub fn is_heavy(self, threshold: u8) -> bool {
        self.0 >= threshold
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
