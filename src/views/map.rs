use std::fmt;

use serde::Serialize;

use crate::data::model::{Dataset, Listing};
use crate::data::query::{filter_by_city, first_listing, map_points, MapPoint};

/// Shown in place of the property card when a city has no listings.
pub const NO_DATA_MESSAGE: &str = "No data for this selection";

/// Detail card for the selected property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCard {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
}

impl From<&Listing> for PropertyCard {
    fn from(listing: &Listing) -> Self {
        PropertyCard {
            title: listing.title().to_string(),
            description: listing.description().map(str::to_string),
            url: listing.url().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectedProperty {
    Card(PropertyCard),
    NoData { message: String },
}

/// Map page: every listing of a city plus the card of its first listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub city: String,
    pub points: Vec<MapPoint>,
    pub selected: SelectedProperty,
}

impl MapView {
    pub fn build(dataset: &Dataset, city: &str) -> Self {
        let filtered = filter_by_city(dataset, city);
        let selected = match first_listing(&filtered) {
            Ok(listing) => SelectedProperty::Card(listing.into()),
            Err(e) => {
                log::debug!("Map for '{city}': {e}");
                SelectedProperty::NoData {
                    message: NO_DATA_MESSAGE.to_string(),
                }
            }
        };

        MapView {
            city: city.to_string(),
            points: map_points(&filtered),
            selected,
        }
    }
}

impl fmt::Display for MapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Map: {} ({} points)", self.city, self.points.len())?;
        match &self.selected {
            SelectedProperty::Card(card) => {
                writeln!(f, "  Selected Property Information")?;
                writeln!(f, "    Title: {}", card.title)?;
                writeln!(
                    f,
                    "    Description: {}",
                    card.description.as_deref().unwrap_or("")
                )?;
                writeln!(f, "    URL: {}", card.url)
            }
            SelectedProperty::NoData { message } => writeln!(f, "  {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::dataset;

    #[test]
    fn card_shows_first_listing_of_city() {
        let ds = dataset(&[
            ("Dallas", "3", Some("$300")),
            ("Austin", "2", Some("$100")),
            ("Austin", "1", Some("$90")),
        ]);
        let view = MapView::build(&ds, "Austin");

        assert_eq!(view.points.len(), 2);
        assert_eq!(
            view.selected,
            SelectedProperty::Card(PropertyCard {
                title: "2 in Austin".to_string(),
                description: None,
                url: "https://www.airbnb.com/rooms/1".to_string(),
            })
        );
    }

    #[test]
    fn unknown_city_falls_back_to_no_data() {
        let ds = dataset(&[("Austin", "1", Some("$90"))]);
        let view = MapView::build(&ds, "El Paso");

        assert!(view.points.is_empty());
        assert_eq!(
            view.selected,
            SelectedProperty::NoData {
                message: NO_DATA_MESSAGE.to_string()
            }
        );
        assert!(view.to_string().contains(NO_DATA_MESSAGE));
    }

    #[test]
    fn selected_property_serializes_with_a_kind_tag() {
        let ds = dataset(&[("Austin", "1", Some("$90"))]);
        let json = serde_json::to_value(MapView::build(&ds, "Nowhere").selected).unwrap();
        assert_eq!(json["kind"], "no_data");
    }
}
