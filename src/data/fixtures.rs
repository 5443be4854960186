//! Shared builders for unit tests.

use super::model::{Dataset, Listing, RawListing};

pub(crate) fn raw(city: &str, bedrooms: &str, rate: Option<&str>) -> RawListing {
    RawListing {
        title: format!("{bedrooms} in {city}"),
        description: None,
        url: "https://www.airbnb.com/rooms/1".to_string(),
        city: city.to_string(),
        bedrooms_count: bedrooms.to_string(),
        average_rate_per_night: rate.map(str::to_string),
        date_of_listing: "May 2016".to_string(),
        latitude: "30.26".to_string(),
        longitude: "-97.74".to_string(),
    }
}

pub(crate) fn listing(city: &str, bedrooms: &str, rate: Option<&str>) -> Listing {
    Listing::from_raw(raw(city, bedrooms, rate)).unwrap()
}

/// `(city, bedrooms_count, average_rate_per_night)` triples to a dataset.
pub(crate) fn dataset(rows: &[(&str, &str, Option<&str>)]) -> Dataset {
    let listings = rows
        .iter()
        .map(|&(city, bedrooms, rate)| listing(city, bedrooms, rate))
        .collect();
    Dataset::from_listings(listings, Vec::new())
}
