use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::config::ParsePolicy;

use super::error::{LoadError, ParseError};
use super::model::{Dataset, Listing, RawListing, RejectedRecord, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalize a listings file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming at least the listing columns; extra columns
///   (such as an unnamed index column) are ignored
/// * `.json` – `[{ "title": ..., "city": ..., ... }, ...]`
pub fn load_file(path: &Path, policy: ParsePolicy) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open = || {
        File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    let dataset = match ext.as_str() {
        "csv" => load_csv_reader(open()?, policy),
        "json" => load_json_reader(BufReader::new(open()?), policy),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }?;

    log::info!(
        "Loaded {} listings across {} cities from {} ({} rejected)",
        dataset.len(),
        dataset.cities().len(),
        path.display(),
        dataset.rejected().len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

pub fn load_csv_reader<R: Read>(source: R, policy: ParsePolicy) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(LoadError::MissingColumn(*missing));
    }

    let rows = reader
        .deserialize::<RawListing>()
        .map(|result| result.map(Listing::from_raw).map_err(LoadError::from));
    normalize_rows(rows, policy)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, as a dataframe export writes it):
///
/// ```json
/// [
///   {
///     "title": "Cozy studio",
///     "description": null,
///     "url": "https://www.airbnb.com/rooms/1",
///     "city": "Austin",
///     "bedrooms_count": "Studio",
///     "average_rate_per_night": "$85",
///     "date_of_listing": "May 2016",
///     "latitude": 30.26,
///     "longitude": -97.74
///   }
/// ]
/// ```
///
/// Text fields may also arrive as numbers (`"bedrooms_count": 2`); they keep
/// their JSON spelling. A record with a missing or non-scalar field is a
/// per-record error and follows `policy`.
pub fn load_json_reader<R: Read>(source: R, policy: ParsePolicy) -> Result<Dataset, LoadError> {
    let records: Vec<JsonValue> = serde_json::from_reader(source)?;
    let rows = records
        .iter()
        .map(|rec| Ok(json_to_raw(rec).and_then(Listing::from_raw)));
    normalize_rows(rows, policy)
}

fn json_to_raw(rec: &JsonValue) -> Result<RawListing, ParseError> {
    let obj = rec
        .as_object()
        .ok_or_else(|| ParseError::NotARecord(rec.to_string()))?;

    let text = |field: &'static str| -> Result<String, ParseError> {
        json_text(obj.get(field), field)?.ok_or(ParseError::MissingField(field))
    };
    let optional = |field: &'static str| json_text(obj.get(field), field);

    Ok(RawListing {
        title: text("title")?,
        description: optional("description")?,
        url: text("url")?,
        city: text("city")?,
        bedrooms_count: text("bedrooms_count")?,
        average_rate_per_night: optional("average_rate_per_night")?,
        date_of_listing: text("date_of_listing")?,
        latitude: text("latitude")?,
        longitude: text("longitude")?,
    })
}

/// Absent and `null` are `None`; strings and numbers become text.
fn json_text(val: Option<&JsonValue>, field: &'static str) -> Result<Option<String>, ParseError> {
    match val {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(ParseError::WrongType {
            field,
            found: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Normalization pass
// ---------------------------------------------------------------------------

/// Outer `Err` is a fatal load error; inner `Err` is a bad record.
fn normalize_rows<I>(rows: I, policy: ParsePolicy) -> Result<Dataset, LoadError>
where
    I: IntoIterator<Item = Result<Result<Listing, ParseError>, LoadError>>,
{
    let mut listings = Vec::new();
    let mut rejected = Vec::new();

    for (row, normalized) in rows.into_iter().enumerate() {
        match normalized? {
            Ok(listing) => listings.push(listing),
            Err(error) => match policy {
                ParsePolicy::Abort => return Err(LoadError::Parse { row, source: error }),
                ParsePolicy::Skip => {
                    log::warn!("Skipping row {row}: {error}");
                    rejected.push(RejectedRecord { row, error });
                }
            },
        }
    }

    Ok(Dataset::from_listings(listings, rejected))
}
