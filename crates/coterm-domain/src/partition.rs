//! Partition module - which annotation source the statistics come from

use serde::{Deserialize, Serialize};

/// Data partition of the co-occurring term statistics
///
/// Both partitions hold the same kind of statistics, computed from different
/// annotation sets:
/// - Manual: curated (non-electronic) annotations only
/// - All: annotations from every source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Partition {
    /// Curated annotations only
    Manual,

    /// All annotations
    All,
}

impl Partition {
    /// Both partitions, in load order
    pub const BOTH: [Partition; 2] = [Partition::Manual, Partition::All];

    /// Get the partition name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Manual => "MANUAL",
            Partition::All => "ALL",
        }
    }

    /// Parse a partition name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "MANUAL" => Some(Partition::Manual),
            "ALL" => Some(Partition::All),
            _ => None,
        }
    }
}

impl Default for Partition {
    fn default() -> Self {
        Partition::All
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Partition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid partition: {}", s))
    }
}
