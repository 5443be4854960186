//! Per-field derivations applied once to every source row.

use super::error::ParseError;

/// Bedroom label the source uses for zero-bedroom units.
pub const STUDIO_LABEL: &str = "Studio";

/// `"$120"` → `Some(120.0)`; an absent source value stays absent.
///
/// The first character is the currency symbol and is dropped regardless of
/// what it is.
pub fn parse_rate(raw: Option<&str>) -> Result<Option<f64>, ParseError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let mut chars = raw.chars();
    chars.next();
    parse_number("average_rate_per_night", chars.as_str()).map(Some)
}

/// `"Studio"` → `0.0`, anything else must be numeric.
pub fn parse_bedrooms(label: &str) -> Result<f64, ParseError> {
    if label == STUDIO_LABEL {
        return Ok(0.0);
    }
    parse_number("bedrooms_count", label)
}

/// Lowercase, then trim. Idempotent.
pub fn normalize_city(city: &str) -> String {
    city.to_lowercase().trim().to_string()
}

/// `"May 2016"` → `("May", 2016)`. Tokens past the second are ignored.
pub fn split_listing_date(date: &str) -> Result<(String, i32), ParseError> {
    let mut tokens = date.split_whitespace();
    let (Some(month), Some(year)) = (tokens.next(), tokens.next()) else {
        return Err(ParseError::MalformedDate(date.to_string()));
    };
    let year = year.parse::<i32>().map_err(|_| ParseError::NotNumeric {
        field: "date_of_listing",
        value: year.to_string(),
    })?;
    Ok((month.to_string(), year))
}

pub fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    parse_number(field, raw)
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ParseError::NotNumeric {
            field,
            value: raw.to_string(),
        })
}
