//! Types shared between the message exchange and key directory operations.

pub mod operations;

use serde::{Deserialize, Serialize};
use std::{fmt::Display, num::ParseIntError, str::FromStr};

/// Numeric handle naming a party in the message exchange and key directory.
///
/// The remote service is the sole authority on these identifiers; the client
/// performs no uniqueness or ownership checks.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PartyId(u64);

impl PartyId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PartyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PartyId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
