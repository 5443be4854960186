use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::error::EmptyResultError;
use super::model::{Dataset, Listing};

// ---------------------------------------------------------------------------
// Selection: read-only view over the dataset
// ---------------------------------------------------------------------------

/// Listings picked out of a [`Dataset`], in dataset order.
pub type Selection<'a> = Vec<&'a Listing>;

/// Distinct raw city values in first-occurrence order.
pub fn distinct_cities(dataset: &Dataset) -> &[String] {
    dataset.cities()
}

/// Listings whose raw `city` equals `city` exactly.
///
/// Case-sensitive and untrimmed: `"austin"` does not select `"Austin"`.
pub fn filter_by_city<'a>(dataset: &'a Dataset, city: &str) -> Selection<'a> {
    dataset
        .listings()
        .iter()
        .filter(|listing| listing.city() == city)
        .collect()
}

/// First listing of a selection.
pub fn first_listing<'a>(filtered: &[&'a Listing]) -> Result<&'a Listing, EmptyResultError> {
    filtered.first().copied().ok_or(EmptyResultError)
}

/// Mean nightly rate of the listings labelled `bedroom_label`.
///
/// Listings without a rate are left out of the mean; `None` when nothing
/// contributes.
pub fn mean_rate_by_bedroom(filtered: &[&Listing], bedroom_label: &str) -> Option<f64> {
    let (sum, count) = filtered
        .iter()
        .filter(|listing| listing.bedrooms_count() == bedroom_label)
        .filter_map(|listing| listing.average_rate_per_night_dollar())
        .fold((0.0, 0usize), |(sum, count), rate| (sum + rate, count + 1));

    (count > 0).then(|| sum / count as f64)
}

// ---------------------------------------------------------------------------
// Chart aggregates
// ---------------------------------------------------------------------------

/// Distinct bedroom labels, sorted as text (`"1" < "2" < "Studio"`).
pub fn bedroom_labels<'a>(filtered: &[&'a Listing]) -> Vec<&'a str> {
    filtered
        .iter()
        .copied()
        .map(Listing::bedrooms_count)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of listings per bedroom label, in first-occurrence order.
pub fn bedroom_tally(filtered: &[&Listing]) -> Vec<(String, usize)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(String, usize)> = Vec::new();
    for listing in filtered {
        let label = listing.bedrooms_count();
        match slots.get(label) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                slots.insert(label, tally.len());
                tally.push((label.to_string(), 1));
            }
        }
    }
    tally
}

/// One bar of the nightly-rate histogram: `lower <= rate < upper`, except the
/// last bin which also holds `rate == upper`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of the present nightly rates.
pub fn rate_histogram(filtered: &[&Listing], bins: usize) -> Vec<HistogramBin> {
    let rates: Vec<f64> = filtered
        .iter()
        .filter_map(|listing| listing.average_rate_per_night_dollar())
        .collect();
    if rates.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = rates.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = rates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range.abs() < f64::EPSILON {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: rates.len(),
        }];
    }

    let width = range / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for rate in rates {
        let slot = (((rate - min) / width) as usize).min(bins - 1);
        histogram[slot].count += 1;
    }
    histogram
}

/// A listing's position on the city map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Hover label.
    pub title: String,
}

pub fn map_points(filtered: &[&Listing]) -> Vec<MapPoint> {
    filtered
        .iter()
        .map(|listing| MapPoint {
            latitude: listing.latitude(),
            longitude: listing.longitude(),
            title: listing.title().to_string(),
        })
        .collect()
}
