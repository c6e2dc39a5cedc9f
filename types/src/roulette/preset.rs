use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownPreset;

/// Built-in wheel and payout variants.
///
/// Each fair variant has a tweaked (house-favoring) counterpart and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    EuropeanFair,
    EuropeanTweaked,
    ColorsFair,
    ColorsTweaked,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::EuropeanFair,
        Preset::EuropeanTweaked,
        Preset::ColorsFair,
        Preset::ColorsTweaked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::EuropeanFair => "european-fair",
            Preset::EuropeanTweaked => "european-tweaked",
            Preset::ColorsFair => "colors-fair",
            Preset::ColorsTweaked => "colors-tweaked",
        }
    }

    pub fn is_tweaked(&self) -> bool {
        matches!(self, Preset::EuropeanTweaked | Preset::ColorsTweaked)
    }

    /// The other half of the fair/tweaked pair.
    pub fn counterpart(&self) -> Preset {
        match self {
            Preset::EuropeanFair => Preset::EuropeanTweaked,
            Preset::EuropeanTweaked => Preset::EuropeanFair,
            Preset::ColorsFair => Preset::ColorsTweaked,
            Preset::ColorsTweaked => Preset::ColorsFair,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == wanted)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
