use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Service level for a request. Controls the maximum request length, the
/// canned-response set, and (terrestrial only) the daily message quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Free tier.
    #[default]
    Terrestrial,
    /// Paid mid tier.
    Aerial,
    /// Paid top tier.
    Celestial,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Terrestrial, Tier::Aerial, Tier::Celestial];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Terrestrial => "terrestrial",
            Tier::Aerial => "aerial",
            Tier::Celestial => "celestial",
        }
    }

    /// Maximum query length in characters.
    pub fn max_query_len(self) -> usize {
        match self {
            Tier::Terrestrial => 200,
            Tier::Aerial => 2000,
            Tier::Celestial => 8000,
        }
    }

    /// Whether queries on this tier count against a daily quota.
    pub fn is_metered(self) -> bool {
        matches!(self, Tier::Terrestrial)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terrestrial" => Ok(Tier::Terrestrial),
            "aerial" => Ok(Tier::Aerial),
            "celestial" => Ok(Tier::Celestial),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tier: {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}
