use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{UnknownColor, RED_NUMBERS};

/// Color tag of a pocket.
///
/// Serialized upper case; parsed case-insensitively, like the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
            Color::Green => "GREEN",
        }
    }

    /// Board color of a number on a single-zero wheel.
    pub fn of_number(number: u8) -> Self {
        if number == 0 {
            Color::Green
        } else if RED_NUMBERS.contains(&number) {
            Color::Red
        } else {
            Color::Black
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RED" => Ok(Color::Red),
            "BLACK" => Ok(Color::Black),
            "GREEN" => Ok(Color::Green),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = UnknownColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Outcome label: a wheel number or a color category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Number(u8),
    Category(Color),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(number) => write!(f, "{number}"),
            Label::Category(color) => write!(f, "{color}"),
        }
    }
}

/// One outcome of the wheel with its color and probability weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pocket {
    pub label: Label,
    pub color: Color,
    pub probability: f64,
}

impl Pocket {
    pub fn new(label: Label, color: Color, probability: f64) -> Self {
        Self {
            label,
            color,
            probability,
        }
    }

    /// A numbered pocket colored like a single-zero board.
    pub fn number(number: u8, probability: f64) -> Self {
        Self::new(Label::Number(number), Color::of_number(number), probability)
    }

    /// A category pocket whose label is its own color.
    pub fn category(color: Color, probability: f64) -> Self {
        Self::new(Label::Category(color), color, probability)
    }
}

/// Ordered categorical distribution over outcome labels.
///
/// Construction does not validate; call `validate_wheel` in the execution
/// crate before sampling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wheel {
    pockets: Vec<Pocket>,
}

impl Wheel {
    pub fn new(pockets: Vec<Pocket>) -> Self {
        Self { pockets }
    }

    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    pub fn len(&self) -> usize {
        self.pockets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pockets.is_empty()
    }

    /// Index of the pocket carrying `label`.
    pub fn position(&self, label: &Label) -> Option<usize> {
        self.pockets.iter().position(|pocket| &pocket.label == label)
    }

    pub fn contains_label(&self, label: &Label) -> bool {
        self.position(label).is_some()
    }

    pub fn contains_color(&self, color: Color) -> bool {
        self.pockets.iter().any(|pocket| pocket.color == color)
    }

    pub fn total_probability(&self) -> f64 {
        self.pockets.iter().map(|pocket| pocket.probability).sum()
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.pockets.iter().map(|pocket| pocket.label)
    }
}

impl FromIterator<Pocket> for Wheel {
    fn from_iter<I: IntoIterator<Item = Pocket>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
