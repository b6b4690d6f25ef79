//! Button variant and size enumerations.
//!
//! Closed sets: parsing an unknown token is an explicit error rather than
//! a silent fall-through to a default look.

use std::str::FromStr;

use thiserror::Error;

/// Unknown token passed to [`ButtonVariant::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button variant: {0:?}")]
pub struct ParseVariantError(pub String);

/// Unknown token passed to [`ButtonSize::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button size: {0:?}")]
pub struct ParseSizeError(pub String);

/// Visual variant of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Error,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}

/// Size of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(ParseSizeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_round_trip() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Success,
            ButtonVariant::Error,
        ] {
            assert_eq!(variant.as_str().parse::<ButtonVariant>(), Ok(variant));
        }
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = "danger".parse::<ButtonVariant>().unwrap_err();
        assert_eq!(err, ParseVariantError("danger".to_string()));
        assert!("Primary".parse::<ButtonVariant>().is_err());
    }

    #[test]
    fn test_size_round_trip() {
        for size in [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large] {
            assert_eq!(size.as_str().parse::<ButtonSize>(), Ok(size));
        }
    }

    #[test]
    fn test_unknown_size_is_rejected() {
        assert!("xl".parse::<ButtonSize>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
    }
}
