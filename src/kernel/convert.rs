//! Temperature conversion engine.
//!
//! Pure functions only: no state, no I/O. Text parsing lives here too so that every frontend
//! reports empty or malformed input through the same `ConvertError` values.

use super::format::format_value;
use super::unit::Unit;
use thiserror::Error;

pub const KELVIN_OFFSET: f64 = 273.15;
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -KELVIN_OFFSET;
pub const ABSOLUTE_ZERO_FAHRENHEIT: f64 = -459.67;

// Slack for float error when a Celsius/Fahrenheit input sits exactly on absolute zero.
const ABSOLUTE_ZERO_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Please enter a temperature value.")]
    EmptyInput,
    #[error("Invalid number format. Use e.g. 25 or -3.2")]
    NotANumber,
    #[error("Kelvin cannot be negative. Kelvin is absolute temperature (>= 0).")]
    InvalidKelvin,
    #[error("Temperature is below absolute zero (-273.15 °C / -459.67 °F).")]
    BelowAbsoluteZero,
    #[error("Please select a unit.")]
    NoUnitSelected,
    #[error("Temperature is too large to convert. Use a smaller value.")]
    OutOfRange,
}

impl ConvertError {
    pub fn title(&self) -> &'static str {
        match self {
            ConvertError::EmptyInput => "Input required",
            ConvertError::NotANumber => "Invalid input",
            ConvertError::InvalidKelvin => "Invalid Kelvin",
            ConvertError::BelowAbsoluteZero => "Below absolute zero",
            ConvertError::NoUnitSelected => "Unit required",
            ConvertError::OutOfRange => "Out of range",
        }
    }

    /// Missing input is a warning; anything the user typed wrong is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, ConvertError::EmptyInput | ConvertError::NoUnitSelected)
    }
}

/// What to do when the unit selector reports no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitPolicy {
    #[default]
    DefaultCelsius,
    Strict,
}

impl UnitPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            UnitPolicy::Strict
        } else {
            UnitPolicy::DefaultCelsius
        }
    }

    fn resolve(self, unit: Option<Unit>) -> Result<Unit, ConvertError> {
        match (unit, self) {
            (Some(unit), _) => Ok(unit),
            (None, UnitPolicy::DefaultCelsius) => Ok(Unit::Celsius),
            (None, UnitPolicy::Strict) => Err(ConvertError::NoUnitSelected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn convert(self) -> Result<ConversionResult, ConvertError> {
        convert(self.value, self.unit)
    }
}

/// One temperature expressed in all three units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl ConversionResult {
    pub fn value(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Celsius => self.celsius,
            Unit::Fahrenheit => self.fahrenheit,
            Unit::Kelvin => self.kelvin,
        }
    }

    /// `"<value to 2 decimals> <symbol>"`, e.g. `"77.00 °F"`.
    pub fn formatted(&self, unit: Unit) -> String {
        format!("{} {}", format_value(self.value(unit)), unit.symbol())
    }

    pub fn summary(&self) -> String {
        Unit::ALL
            .iter()
            .map(|unit| self.formatted(*unit))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn convert(value: f64, unit: Unit) -> Result<ConversionResult, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::NotANumber);
    }

    let result = match unit {
        Unit::Celsius => ConversionResult {
            celsius: value,
            fahrenheit: celsius_to_fahrenheit(value),
            kelvin: checked_kelvin(celsius_to_kelvin(value))?,
        },
        Unit::Fahrenheit => {
            let celsius = fahrenheit_to_celsius(value);
            ConversionResult {
                celsius,
                fahrenheit: value,
                kelvin: checked_kelvin(celsius_to_kelvin(celsius))?,
            }
        }
        Unit::Kelvin => {
            if value < 0.0 {
                return Err(ConvertError::InvalidKelvin);
            }
            let celsius = kelvin_to_celsius(value);
            ConversionResult {
                celsius,
                fahrenheit: celsius_to_fahrenheit(celsius),
                kelvin: value,
            }
        }
    };

    // Finite input near f64::MAX can still overflow in the ×9/5 step.
    if [result.celsius, result.fahrenheit, result.kelvin]
        .iter()
        .all(|v| v.is_finite())
    {
        Ok(result)
    } else {
        Err(ConvertError::OutOfRange)
    }
}

/// Parses `raw` and converts it; `unit` is the selector state, `None` meaning nothing selected.
pub fn convert_text(
    raw: &str,
    unit: Option<Unit>,
    policy: UnitPolicy,
) -> Result<ConversionResult, ConvertError> {
    let value = parse_value(raw)?;
    let unit = policy.resolve(unit)?;
    convert(value, unit)
}

pub fn parse_value(raw: &str) -> Result<f64, ConvertError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConvertError::NotANumber),
    }
}

fn checked_kelvin(kelvin: f64) -> Result<f64, ConvertError> {
    if kelvin < -ABSOLUTE_ZERO_TOLERANCE {
        return Err(ConvertError::BelowAbsoluteZero);
    }
    Ok(kelvin.max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/convert.rs"]
mod tests;
