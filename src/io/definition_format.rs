//! Custom currency definition format
//!
//! Parses the line-oriented `key=value` format used to define custom
//! currencies, producing a validated [`CurrencyDefinition`].
//!
//! # File Format
//!
//! ```text
//! # Lines starting with '#' are comments
//! CURRENCY_CODE=GEM
//! CURRENCY_NAME=Gemstone
//! CURRENCY_SYMBOL=*
//!
//! # Every other key is a denomination name with its minor-unit value
//! gem=10
//! shard=1
//! ```
//!
//! # Rules
//!
//! - Lines split on the first '='; keys and values are trimmed
//! - Blank lines, comment lines, and lines without '=' are skipped
//! - CURRENCY_CODE, CURRENCY_NAME and CURRENCY_SYMBOL are required;
//!   repeated occurrences are each validated and the last one wins
//! - A denomination value must be an integer in [1, 10000000]; lines
//!   that fail this are skipped with a warning rather than aborting
//! - Denomination values must be pairwise distinct
//!
//! The resulting table is sorted by descending value, so definition
//! authors are free to list denominations in any order.

use crate::types::{
    CurrencyDefinition, DefinitionError, Denomination, DenominationTable, MinorUnits,
};
use std::collections::HashSet;
use tracing::warn;

/// Maximum accepted denomination value in minor units
pub const MAX_DENOMINATION_VALUE: MinorUnits = 10_000_000;

/// Maximum length of a currency code, in characters
pub const MAX_CODE_LENGTH: usize = 10;

/// Maximum length of a currency name, in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// Maximum length of a currency symbol, in characters
pub const MAX_SYMBOL_LENGTH: usize = 3;

/// Parse a currency definition from its textual form
///
/// # Arguments
///
/// * `text` - Full contents of a definition file
///
/// # Returns
///
/// * `Ok(CurrencyDefinition)` with the code uppercased and the
///   denomination table sorted by descending value
/// * `Err(DefinitionError)` naming the first violated rule
///
/// # Errors
///
/// Required fields that are present but invalid fail immediately
/// (InvalidCode, InvalidName, InvalidSymbol). Missing required fields
/// are reported after the scan (MissingField), followed by the
/// denomination checks (NoDenominations, DuplicateValue).
pub fn parse_definition(text: &str) -> Result<CurrencyDefinition, DefinitionError> {
    let mut code: Option<String> = None;
    let mut name: Option<String> = None;
    let mut symbol: Option<String> = None;
    let mut denominations: Vec<Denomination> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            warn!(line = raw_line, "Skipping definition line without '='");
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "CURRENCY_CODE" => code = Some(validate_code(value)?),
            "CURRENCY_NAME" => name = Some(validate_name(value)?),
            "CURRENCY_SYMBOL" => symbol = Some(validate_symbol(value)?),
            _ => match parse_denomination_value(value) {
                Some(amount) => denominations.push(Denomination::new(key, amount)),
                None => {
                    warn!(
                        name = key,
                        value, "Skipping denomination with invalid value"
                    );
                }
            },
        }
    }

    let code = code.ok_or(DefinitionError::MissingField {
        field: "CURRENCY_CODE",
    })?;
    let name = name.ok_or(DefinitionError::MissingField {
        field: "CURRENCY_NAME",
    })?;
    let symbol = symbol.ok_or(DefinitionError::MissingField {
        field: "CURRENCY_SYMBOL",
    })?;

    if denominations.is_empty() {
        return Err(DefinitionError::NoDenominations);
    }

    let mut seen = HashSet::new();
    for denomination in &denominations {
        if !seen.insert(denomination.value) {
            return Err(DefinitionError::DuplicateValue {
                value: denomination.value,
            });
        }
    }

    Ok(CurrencyDefinition {
        code,
        name,
        symbol,
        denominations: DenominationTable::new(denominations),
    })
}

/// Validate a currency code and return its canonical uppercase form
///
/// Codes are 1-10 characters of ASCII alphanumerics and underscores,
/// with at least one alphanumeric character.
fn validate_code(value: &str) -> Result<String, DefinitionError> {
    let length = value.chars().count();
    let has_alphanumeric = value.chars().any(|c| c.is_ascii_alphanumeric());
    let all_valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if length == 0 || length > MAX_CODE_LENGTH || !has_alphanumeric || !all_valid {
        return Err(DefinitionError::InvalidCode {
            value: value.to_string(),
        });
    }

    Ok(value.to_uppercase())
}

fn validate_name(value: &str) -> Result<String, DefinitionError> {
    let length = value.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(DefinitionError::InvalidName { length });
    }

    Ok(value.to_string())
}

fn validate_symbol(value: &str) -> Result<String, DefinitionError> {
    let length = value.chars().count();
    if length == 0 || length > MAX_SYMBOL_LENGTH {
        return Err(DefinitionError::InvalidSymbol {
            value: value.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Parse a denomination value, accepting only integers in range
fn parse_denomination_value(value: &str) -> Option<MinorUnits> {
    value
        .parse::<MinorUnits>()
        .ok()
        .filter(|v| (1..=MAX_DENOMINATION_VALUE).contains(v))
}
