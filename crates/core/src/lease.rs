//! Rental duration types and the coarse lease groups derived from them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DURATION_SHORT_TERM: &str = "SHORT_TERM";
pub const DURATION_MEDIUM_TERM: &str = "MEDIUM_TERM";
pub const DURATION_LONG_TERM: &str = "LONG_TERM";

pub const LEASE_GROUP_SHORT: &str = "SHORT";
pub const LEASE_GROUP_MID: &str = "MID";
pub const LEASE_GROUP_LONG: &str = "LONG";

/// All valid lease group codes, in metadata order.
pub const VALID_LEASE_GROUPS: &[&str] = &[LEASE_GROUP_SHORT, LEASE_GROUP_MID, LEASE_GROUP_LONG];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Declared rental duration of a category or item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalDurationType {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl RentalDurationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortTerm => DURATION_SHORT_TERM,
            Self::MediumTerm => DURATION_MEDIUM_TERM,
            Self::LongTerm => DURATION_LONG_TERM,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            DURATION_SHORT_TERM => Some(Self::ShortTerm),
            DURATION_MEDIUM_TERM => Some(Self::MediumTerm),
            DURATION_LONG_TERM => Some(Self::LongTerm),
            _ => None,
        }
    }

    pub fn lease_group(&self) -> LeaseGroup {
        match self {
            Self::ShortTerm => LeaseGroup::Short,
            Self::MediumTerm => LeaseGroup::Mid,
            Self::LongTerm => LeaseGroup::Long,
        }
    }
}

/// Coarse rental-duration bucket that selects the duration-specific rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaseGroup {
    Short,
    Mid,
    Long,
}

impl LeaseGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => LEASE_GROUP_SHORT,
            Self::Mid => LEASE_GROUP_MID,
            Self::Long => LEASE_GROUP_LONG,
        }
    }

    /// Parse a lease group code as stored in metadata (`SHORT`, `MID`, `LONG`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            LEASE_GROUP_SHORT => Some(Self::Short),
            LEASE_GROUP_MID => Some(Self::Mid),
            LEASE_GROUP_LONG => Some(Self::Long),
            _ => None,
        }
    }

    /// Strict mapping from a rental duration type code. Returns `None` for
    /// anything other than `SHORT_TERM`, `MEDIUM_TERM` or `LONG_TERM`.
    pub fn parse_duration_type(duration_type: &str) -> Option<Self> {
        RentalDurationType::from_code(duration_type).map(|d| d.lease_group())
    }

    /// Lenient mapping used by the publish checks.
    ///
    /// Missing or unrecognized duration types fall back to [`LeaseGroup::Mid`].
    /// Use [`LeaseGroup::parse_duration_type`] to tell the fallback apart from
    /// a genuine `MEDIUM_TERM`.
    pub fn from_duration_type(duration_type: Option<&str>) -> Self {
        duration_type
            .and_then(Self::parse_duration_type)
            .unwrap_or(Self::Mid)
    }
}

impl std::fmt::Display for LeaseGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
