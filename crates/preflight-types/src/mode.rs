//! Conversion mode.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::PreflightError;

/// Throughput/memory trade-off selected for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Favor throughput at the cost of memory.
    Speed,
    /// Favor lower memory and power draw.
    #[default]
    Power,
}

impl ConversionMode {
    /// Returns the mode as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Power => "power",
        }
    }

    /// Returns the human-readable name of the mode.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Speed => "Speed",
            Self::Power => "Save Power",
        }
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConversionMode {
    type Err = PreflightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "speed" | "fast" => Ok(Self::Speed),
            "power" | "save-power" | "save_power" | "eco" => Ok(Self::Power),
            _ => Err(PreflightError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("speed".parse::<ConversionMode>().unwrap(), ConversionMode::Speed);
        assert_eq!("POWER".parse::<ConversionMode>().unwrap(), ConversionMode::Power);
        assert_eq!(
            "save-power".parse::<ConversionMode>().unwrap(),
            ConversionMode::Power
        );
        assert!("turbo".parse::<ConversionMode>().is_err());
    }

    #[test]
    fn test_default_is_power() {
        assert_eq!(ConversionMode::default(), ConversionMode::Power);
    }
}
