use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    /// Selector order.
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    pub fn label(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    pub fn selector_label(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius (°C)",
            Unit::Fahrenheit => "Fahrenheit (°F)",
            Unit::Kelvin => "Kelvin (K)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Kelvin,
            Unit::Kelvin => Unit::Celsius,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Unit::Celsius => Unit::Kelvin,
            Unit::Fahrenheit => Unit::Celsius,
            Unit::Kelvin => Unit::Fahrenheit,
        }
    }

    /// Accepts names and symbols, case-insensitive (`c`, `celsius`, `°C`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_lowercase();
        match v.as_str() {
            "c" | "°c" | "celsius" | "degc" => Some(Unit::Celsius),
            "f" | "°f" | "fahrenheit" | "degf" => Some(Unit::Fahrenheit),
            "k" | "kelvin" => Some(Unit::Kelvin),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/unit.rs"]
mod tests;
