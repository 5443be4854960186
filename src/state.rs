use std::sync::Arc;

use crate::config::DashConfig;
use crate::data::model::Dataset;
use crate::data::query::distinct_cities;
use crate::views::{ComparisonView, MapView, OverviewView};

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// One dashboard session: the shared dataset plus the current selections.
///
/// Selecting a city only changes the selection; the dataset behind the `Arc`
/// is never touched, so any number of sessions can share it.
#[derive(Debug, Clone)]
pub struct DashState {
    dataset: Arc<Dataset>,

    /// City shown on the overview and map pages.
    pub selected_city: Option<String>,

    /// Cities shown side by side on the comparison page.
    pub compared_cities: Option<(String, String)>,

    histogram_bins: usize,
}

impl DashState {
    /// Start a session with the default selections: the first city, and the
    /// first two cities for the comparison.
    pub fn new(dataset: Arc<Dataset>, config: &DashConfig) -> Self {
        let cities = distinct_cities(&dataset);
        let selected_city = cities.first().cloned();
        let compared_cities = selected_city.clone().map(|first| {
            let second = cities.get(1).cloned().unwrap_or_else(|| first.clone());
            (first, second)
        });

        Self {
            dataset,
            selected_city,
            compared_cities,
            histogram_bins: config.histogram_bins,
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Values offered by the city selectors.
    pub fn city_options(&self) -> &[String] {
        distinct_cities(&self.dataset)
    }

    pub fn select_city(&mut self, city: impl Into<String>) {
        let city = city.into();
        log::debug!("Selected city '{city}'");
        self.selected_city = Some(city);
    }

    pub fn select_comparison(&mut self, first: impl Into<String>, second: impl Into<String>) {
        let (first, second) = (first.into(), second.into());
        log::debug!("Comparing '{first}' with '{second}'");
        self.compared_cities = Some((first, second));
    }

    /// `None` until a city is selected (only possible with an empty dataset).
    pub fn overview(&self) -> Option<OverviewView> {
        let city = self.selected_city.as_deref()?;
        Some(OverviewView::build(&self.dataset, city, self.histogram_bins))
    }

    pub fn map(&self) -> Option<MapView> {
        let city = self.selected_city.as_deref()?;
        Some(MapView::build(&self.dataset, city))
    }

    pub fn comparison(&self) -> Option<ComparisonView> {
        let (first, second) = self.compared_cities.as_ref()?;
        Some(ComparisonView::build(&self.dataset, first, second))
    }
}
