//! Vehicle domain entity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vehicle category as reported by the toll point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Motorbike,
    Tractor,
    /// Ambulance, fire and rescue vehicles
    Emergency,
    Diplomat,
    /// Vehicle registered abroad
    Foreign,
    Military,
}

impl VehicleCategory {
    pub const ALL: &'static [VehicleCategory] = &[
        Self::Car,
        Self::Motorbike,
        Self::Tractor,
        Self::Emergency,
        Self::Diplomat,
        Self::Foreign,
        Self::Military,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorbike => "motorbike",
            Self::Tractor => "tractor",
            Self::Emergency => "emergency",
            Self::Diplomat => "diplomat",
            Self::Foreign => "foreign",
            Self::Military => "military",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "Car"),
            Self::Motorbike => write!(f, "Motorbike"),
            Self::Tractor => write!(f, "Tractor"),
            Self::Emergency => write!(f, "Emergency"),
            Self::Diplomat => write!(f, "Diplomat"),
            Self::Foreign => write!(f, "Foreign"),
            Self::Military => write!(f, "Military"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown vehicle category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for VehicleCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A vehicle passing a toll point. Only the category matters for fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    pub category: VehicleCategory,
}

impl Vehicle {
    pub fn new(category: VehicleCategory) -> Self {
        Self { category }
    }

    pub fn car() -> Self {
        Self::new(VehicleCategory::Car)
    }
}

impl From<VehicleCategory> for Vehicle {
    fn from(category: VehicleCategory) -> Self {
        Self::new(category)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("car".parse::<VehicleCategory>(), Ok(VehicleCategory::Car));
        assert_eq!(" Motorbike ".parse::<VehicleCategory>(), Ok(VehicleCategory::Motorbike));
        assert_eq!("MILITARY".parse::<VehicleCategory>(), Ok(VehicleCategory::Military));
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "bus".parse::<VehicleCategory>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown vehicle category: bus");
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for category in VehicleCategory::ALL {
            assert_eq!(category.as_str().parse::<VehicleCategory>().as_ref(), Ok(category));
        }
    }

    #[test]
    fn display_is_capitalised() {
        assert_eq!(VehicleCategory::Diplomat.to_string(), "Diplomat");
        assert_eq!(VehicleCategory::Car.to_string(), "Car");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Vehicle::car()).unwrap();
        assert_eq!(json, r#"{"category":"car"}"#);
    }
}
