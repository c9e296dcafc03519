//! Species tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Species discriminator selecting which upstream provider to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Dog breeds (TheDogAPI)
    Dog,
    /// Cat breeds (TheCatAPI)
    Cat,
}

/// Returned when a route carries a tag other than `dog` or `cat`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown species tag: {0}")]
pub struct UnknownSpecies(pub String);

impl Species {
    /// Route tag for this species
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    /// Human-readable plural used in headings and messages
    pub fn plural(&self) -> &'static str {
        match self {
            Species::Dog => "dog breeds",
            Species::Cat => "cat breeds",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            other => Err(UnknownSpecies(other.to_string())),
        }
    }
}
