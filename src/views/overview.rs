use std::fmt;

use serde::Serialize;

use crate::data::model::Dataset;
use crate::data::query::{bedroom_tally, filter_by_city, rate_histogram, HistogramBin};

/// Bar of the bedrooms-count chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BedroomCount {
    pub label: String,
    pub count: usize,
}

/// Overview page: rate distribution and bedroom distribution of one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub city: String,
    pub listing_count: usize,
    pub rate_histogram: Vec<HistogramBin>,
    pub bedroom_counts: Vec<BedroomCount>,
}

impl OverviewView {
    pub fn build(dataset: &Dataset, city: &str, bins: usize) -> Self {
        let filtered = filter_by_city(dataset, city);
        let bedroom_counts = bedroom_tally(&filtered)
            .into_iter()
            .map(|(label, count)| BedroomCount { label, count })
            .collect();

        OverviewView {
            city: city.to_string(),
            listing_count: filtered.len(),
            rate_histogram: rate_histogram(&filtered, bins),
            bedroom_counts,
        }
    }
}

impl fmt::Display for OverviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Overview: {} ({} listings)", self.city, self.listing_count)?;
        writeln!(f, "  Average rate per night distribution")?;
        if self.rate_histogram.is_empty() {
            writeln!(f, "    (no rates)")?;
        }
        for bin in &self.rate_histogram {
            writeln!(f, "    {:>9.2} - {:>9.2}  {}", bin.lower, bin.upper, bin.count)?;
        }
        writeln!(f, "  Bedrooms count distribution")?;
        for bar in &self.bedroom_counts {
            writeln!(f, "    {:>8}  {}", bar.label, bar.count)?;
        }
        Ok(())
    }
}
