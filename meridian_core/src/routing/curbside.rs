use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Which side of the road a waypoint must be approached or departed from.
/// The empty string is the wire form of `Unspecified`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curbside {
    Left,
    Right,
    Any,
    #[default]
    #[serde(alias = "")]
    Unspecified,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown curbside value '{0}'")]
pub struct ParseCurbsideError(pub String);

impl FromStr for Curbside {
    type Err = ParseCurbsideError;

    fn from_str(value: &str) -> Result<Curbside, Self::Err> {
        match value {
            "left" => Ok(Curbside::Left),
            "right" => Ok(Curbside::Right),
            "any" => Ok(Curbside::Any),
            "" | "unspecified" => Ok(Curbside::Unspecified),
            other => Err(ParseCurbsideError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Curbside {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Curbside::Left => "left",
            Curbside::Right => "right",
            Curbside::Any => "any",
            Curbside::Unspecified => "unspecified",
        };
        write!(f, "{}", value)
    }
}
