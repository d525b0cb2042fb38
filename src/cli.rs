//! Command line surface: no arguments starts the TUI, `<value> [unit]` converts once.

use crate::kernel::{convert_text, ConversionResult, ConvertError, Unit, UnitPolicy};
use thiserror::Error;

pub const USAGE: &str = "\
Usage: tconv [VALUE [UNIT]]

Without arguments, opens the interactive converter.
With VALUE, prints VALUE converted to Celsius, Fahrenheit and Kelvin.
UNIT is one of c, f, k (or celsius, fahrenheit, kelvin); defaults to Celsius.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliRequest {
    Interactive,
    Help,
    Convert { value: String, unit: Option<Unit> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown unit '{0}' (expected c, f or k)")]
    UnknownUnit(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

pub fn parse_args<I, S>(args: I) -> Result<CliRequest, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(CliRequest::Help);
    }

    let mut iter = args.into_iter();
    let Some(value) = iter.next() else {
        return Ok(CliRequest::Interactive);
    };
    let unit = match iter.next() {
        Some(raw) => Some(Unit::parse(&raw).ok_or(CliError::UnknownUnit(raw))?),
        None => None,
    };
    if let Some(extra) = iter.next() {
        return Err(CliError::UnexpectedArgument(extra));
    }

    Ok(CliRequest::Convert { value, unit })
}

pub fn convert_once(value: &str, unit: Option<Unit>) -> Result<String, ConvertError> {
    let result = convert_text(value, unit, UnitPolicy::DefaultCelsius)?;
    Ok(render_result(&result))
}

pub fn render_result(result: &ConversionResult) -> String {
    Unit::ALL
        .iter()
        .map(|unit| {
            format!(
                "{:<11} {}",
                format!("{}:", unit.label()),
                result.formatted(*unit)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
