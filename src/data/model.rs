use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::ParseError;
use super::normalize;

// ---------------------------------------------------------------------------
// RawListing – one source row, textual fields verbatim
// ---------------------------------------------------------------------------

/// A source row before normalization. Extra source columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub city: String,
    pub bedrooms_count: String,
    pub average_rate_per_night: Option<String>,
    pub date_of_listing: String,
    pub latitude: String,
    pub longitude: String,
}

/// Columns every source must carry.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "title",
    "description",
    "url",
    "city",
    "bedrooms_count",
    "average_rate_per_night",
    "date_of_listing",
    "latitude",
    "longitude",
];

// ---------------------------------------------------------------------------
// Listing – one normalized row of the Dataset
// ---------------------------------------------------------------------------

/// A single rental property entry with its derived, typed fields.
///
/// Only [`Listing::from_raw`] builds one, so the derived fields always agree
/// with the source text they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    title: String,
    description: Option<String>,
    url: String,
    city: String,
    city_normalized: String,
    bedrooms_count: String,
    bedrooms_count_numeric: f64,
    average_rate_per_night: Option<String>,
    average_rate_per_night_dollar: Option<f64>,
    date_of_listing: String,
    listing_month: String,
    listing_year: i32,
    latitude: f64,
    longitude: f64,
}

impl Listing {
    /// Normalize a raw row. The first field that fails aborts this record.
    pub fn from_raw(raw: RawListing) -> Result<Self, ParseError> {
        let average_rate_per_night_dollar =
            normalize::parse_rate(raw.average_rate_per_night.as_deref())?;
        let bedrooms_count_numeric = normalize::parse_bedrooms(&raw.bedrooms_count)?;
        let city_normalized = normalize::normalize_city(&raw.city);
        let (listing_month, listing_year) = normalize::split_listing_date(&raw.date_of_listing)?;
        let latitude = normalize::parse_coordinate("latitude", &raw.latitude)?;
        let longitude = normalize::parse_coordinate("longitude", &raw.longitude)?;

        Ok(Listing {
            title: raw.title,
            description: raw.description,
            url: raw.url,
            city: raw.city,
            city_normalized,
            bedrooms_count: raw.bedrooms_count,
            bedrooms_count_numeric,
            average_rate_per_night: raw.average_rate_per_night,
            average_rate_per_night_dollar,
            date_of_listing: raw.date_of_listing,
            listing_month,
            listing_year,
            latitude,
            longitude,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// City name exactly as provided by the source.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Lowercased, trimmed form of [`Listing::city`].
    pub fn city_normalized(&self) -> &str {
        &self.city_normalized
    }

    /// Original bedroom label, e.g. `"2"` or `"Studio"`.
    pub fn bedrooms_count(&self) -> &str {
        &self.bedrooms_count
    }

    pub fn bedrooms_count_numeric(&self) -> f64 {
        self.bedrooms_count_numeric
    }

    /// Original currency-prefixed rate string, e.g. `"$120"`.
    pub fn average_rate_per_night(&self) -> Option<&str> {
        self.average_rate_per_night.as_deref()
    }

    pub fn average_rate_per_night_dollar(&self) -> Option<f64> {
        self.average_rate_per_night_dollar
    }

    pub fn date_of_listing(&self) -> &str {
        &self.date_of_listing
    }

    pub fn listing_month(&self) -> &str {
        &self.listing_month
    }

    pub fn listing_year(&self) -> i32 {
        self.listing_year
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded, normalized table
// ---------------------------------------------------------------------------

/// A source row that was left out of the dataset under the skip policy.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Zero-based data row index (header excluded).
    pub row: usize,
    pub error: ParseError,
}

/// The full immutable collection of listings with a pre-computed city index.
#[derive(Debug, Clone)]
pub struct Dataset {
    listings: Vec<Listing>,
    /// Distinct raw city values in first-occurrence order.
    cities: Vec<String>,
    rejected: Vec<RejectedRecord>,
}

impl Dataset {
    /// Build the city index from normalized listings.
    pub fn from_listings(listings: Vec<Listing>, rejected: Vec<RejectedRecord>) -> Self {
        let cities = {
            let mut seen: HashSet<&str> = HashSet::new();
            listings
                .iter()
                .map(Listing::city)
                .filter(|city| seen.insert(*city))
                .map(str::to_string)
                .collect()
        };

        Dataset {
            listings,
            cities,
            rejected,
        }
    }

    /// All listings in source order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Records skipped during normalization.
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
