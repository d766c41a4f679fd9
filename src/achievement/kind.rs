//! Achievement definitions

use std::fmt;

/// Counter an achievement is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// Number of cases filed
    Cases,
    /// Number of appeals lodged
    Appeals,
}

/// Session achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    FirstCase,
    MasterLitigant,
    PersistentAppellant,
}

impl Achievement {
    /// All achievements, in display order
    pub const ALL: [Achievement; 3] = [
        Achievement::FirstCase,
        Achievement::MasterLitigant,
        Achievement::PersistentAppellant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Achievement::FirstCase => "First Case",
            Achievement::MasterLitigant => "Master Litigant",
            Achievement::PersistentAppellant => "Persistent Appellant",
        }
    }

    pub fn milestone(self) -> Milestone {
        match self {
            Achievement::FirstCase | Achievement::MasterLitigant => Milestone::Cases,
            Achievement::PersistentAppellant => Milestone::Appeals,
        }
    }

    /// Count at which the achievement unlocks
    pub fn threshold(self) -> usize {
        match self {
            Achievement::FirstCase => 1,
            Achievement::MasterLitigant => 5,
            Achievement::PersistentAppellant => 3,
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
