use std::fmt;

use serde::Serialize;

use crate::data::model::Dataset;
use crate::data::query::{bedroom_labels, filter_by_city, mean_rate_by_bedroom};

use super::fmt_rate;

/// Mean nightly rate of one bedroom label in both compared cities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub bedrooms: String,
    pub first: Option<f64>,
    pub second: Option<f64>,
}

/// Cities comparison page.
///
/// Rows follow the bedroom labels of the first city; a label the second city
/// lacks shows up with `second: None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub first_city: String,
    pub second_city: String,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonView {
    pub fn build(dataset: &Dataset, first_city: &str, second_city: &str) -> Self {
        let first = filter_by_city(dataset, first_city);
        let second = filter_by_city(dataset, second_city);

        let rows = bedroom_labels(&first)
            .into_iter()
            .map(|label| ComparisonRow {
                bedrooms: label.to_string(),
                first: mean_rate_by_bedroom(&first, label),
                second: mean_rate_by_bedroom(&second, label),
            })
            .collect();

        ComparisonView {
            first_city: first_city.to_string(),
            second_city: second_city.to_string(),
            rows,
        }
    }
}

impl fmt::Display for ComparisonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Cities Comparison: {} vs {}",
            self.first_city, self.second_city
        )?;
        writeln!(
            f,
            "  {:>8}  {:>12}  {:>12}",
            "Bedrooms", self.first_city, self.second_city
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:>8}  {:>12}  {:>12}",
                row.bedrooms,
                fmt_rate(row.first),
                fmt_rate(row.second)
            )?;
        }
        Ok(())
    }
}
