use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a catalog entry. Serialized as its value string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovieStatus {
    #[serde(rename = "Rumored")]
    Rumored,
    #[serde(rename = "Planned")]
    Planned,
    #[serde(rename = "In Production")]
    InProduction,
    #[serde(rename = "Post Production")]
    PostProduction,
    #[serde(rename = "Released")]
    Released,
    #[serde(rename = "Canceled")]
    Canceled,
}

impl MovieStatus {
    pub const ALL: [MovieStatus; 6] = [
        MovieStatus::Rumored,
        MovieStatus::Planned,
        MovieStatus::InProduction,
        MovieStatus::PostProduction,
        MovieStatus::Released,
        MovieStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::Rumored => "Rumored",
            MovieStatus::Planned => "Planned",
            MovieStatus::InProduction => "In Production",
            MovieStatus::PostProduction => "Post Production",
            MovieStatus::Released => "Released",
            MovieStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown movie status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for MovieStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
