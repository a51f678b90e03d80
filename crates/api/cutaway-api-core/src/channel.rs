//! Channel parsing and formatting.
//!
//! A channel is the animatable data path on the master camera that a key op
//! targets. The set is closed: the scheduler only ever drives the camera's
//! location and Euler rotation. Channels serialize as their canonical
//! snake_case path string so batches stay readable in JSON.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Animatable data path on the master camera.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    Location,
    RotationEuler,
}

/// A channel string that does not name a known data path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel path: '{0}'")]
pub struct ParseChannelError(pub String);

impl Channel {
    /// Both pose channels, in the order keys are emitted per frame.
    pub const ALL: [Channel; 2] = [Channel::Location, Channel::RotationEuler];

    /// Canonical data-path string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Location => "location",
            Channel::RotationEuler => "rotation_euler",
        }
    }

    /// Parse a canonical data-path string.
    pub fn parse(s: &str) -> Result<Self, ParseChannelError> {
        match s {
            "location" => Ok(Channel::Location),
            "rotation_euler" => Ok(Channel::RotationEuler),
            other => Err(ParseChannelError(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::parse(s)
    }
}

// Serialize as the canonical path string rather than an enum tag.
impl Serialize for Channel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Channel {
    fn deserialize<D>(deserializer: D) -> Result<Channel, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Channel::parse(&s).map_err(de::Error::custom)
    }
}
