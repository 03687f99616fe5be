use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;

/// Smallest ruler length accepted by the form.
pub const MIN_LENGTH: u32 = 1;
/// Largest ruler length accepted by the form.
pub const MAX_LENGTH: u32 = 100;
/// Length preselected when the form first opens.
pub const DEFAULT_LENGTH: u32 = 30;
/// Maximum number of characters kept from the ruler name.
pub const MAX_NAME_CHARS: usize = 30;

/// Unit of measurement printed on the ruler.
///
/// The wire tokens are `cm`, `mm` and `pol` (inches). Any other token falls
/// back to centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Unit {
    #[default]
    Centimeter,
    Millimeter,
    Inch,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Centimeter, Unit::Millimeter, Unit::Inch];

    /// Parses a unit token, falling back to `Centimeter` for anything unknown.
    pub fn from_token(token: &str) -> Self {
        match token {
            "mm" => Unit::Millimeter,
            "pol" => Unit::Inch,
            _ => Unit::Centimeter,
        }
    }

    /// The short token used in file names and form values.
    pub fn token(self) -> &'static str {
        match self {
            Unit::Centimeter => "cm",
            Unit::Millimeter => "mm",
            Unit::Inch => "pol",
        }
    }

    /// Human readable label for the unit selector.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Centimeter => "Centimeters (cm)",
            Unit::Millimeter => "Millimeters (mm)",
            Unit::Inch => "Inches (pol)",
        }
    }
}

impl From<String> for Unit {
    fn from(token: String) -> Self {
        Unit::from_token(&token)
    }
}

impl From<Unit> for &'static str {
    fn from(unit: Unit) -> Self {
        unit.token()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Physical width of the ruler strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RulerWidth {
    #[default]
    TwoCm,
    ThreeCm,
    FourCm,
}

impl RulerWidth {
    pub const ALL: [RulerWidth; 3] = [RulerWidth::TwoCm, RulerWidth::ThreeCm, RulerWidth::FourCm];

    pub fn centimeters(self) -> u8 {
        match self {
            RulerWidth::TwoCm => 2,
            RulerWidth::ThreeCm => 3,
            RulerWidth::FourCm => 4,
        }
    }
}

impl TryFrom<u8> for RulerWidth {
    type Error = String;

    fn try_from(cm: u8) -> std::result::Result<Self, Self::Error> {
        match cm {
            2 => Ok(RulerWidth::TwoCm),
            3 => Ok(RulerWidth::ThreeCm),
            4 => Ok(RulerWidth::FourCm),
            other => Err(format!("unsupported ruler width: {other} cm (expected 2, 3 or 4)")),
        }
    }
}

impl From<RulerWidth> for u8 {
    fn from(width: RulerWidth) -> Self {
        width.centimeters()
    }
}

/// An immutable snapshot of the ruler form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulerConfig {
    /// Unit printed on the ruler; selects the subdivision scheme.
    pub unit: Unit,
    /// Number of units along the ruler, `MIN_LENGTH..=MAX_LENGTH`.
    pub length: u32,
    /// Physical width of the strip.
    pub width_cm: RulerWidth,
    /// Optional label printed in the middle of the ruler. Empty means none.
    pub name: String,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Centimeter,
            length: DEFAULT_LENGTH,
            width_cm: RulerWidth::TwoCm,
            name: String::new(),
        }
    }
}

impl RulerConfig {
    /// Builds a config, clamping the length and truncating the name.
    pub fn new(unit: Unit, length: u32, width_cm: RulerWidth, name: impl Into<String>) -> Self {
        Self {
            unit,
            length,
            width_cm,
            name: name.into(),
        }
        .normalized()
    }

    /// Parses a JSON document such as `{"unit":"mm","length":50,"widthCm":2}`.
    /// Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RulerConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Applies the form constraints: length within range, name at most 30 chars.
    pub fn normalized(mut self) -> Self {
        self.length = clamp_length(self.length);
        self.name = truncate_name(&self.name);
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

pub fn clamp_length(length: u32) -> u32 {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

pub fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_CHARS).collect()
}
