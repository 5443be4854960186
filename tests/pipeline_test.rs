//! End-to-end tests: listings file on disk → Dataset → queries → views.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use rental_dash::data::query::{
    distinct_cities, filter_by_city, first_listing, mean_rate_by_bedroom,
};
use rental_dash::views::SelectedProperty;
use rental_dash::{
    load_file, DashConfig, DashState, EmptyResultError, Listing, LoadError, ParsePolicy,
};

const HEADER: &str = ",average_rate_per_night,bedrooms_count,city,date_of_listing,description,latitude,longitude,title,url";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn write_csv(dir: &TempDir, rows: &[&str]) -> PathBuf {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    write_file(dir, "listings.csv", &text)
}

#[test]
fn one_row_per_bedroom_label_means_are_the_single_rates() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            "0,$120,1,Austin,May 2016,One bed,30.26,-97.74,A,https://a",
            "1,$75,Studio,Austin,June 2015,Studio,30.27,-97.75,B,https://b",
            "2,$210,2,Austin,July 2014,Two bed,30.28,-97.76,C,https://c",
        ],
    );

    let ds = load_file(&path, ParsePolicy::Skip).unwrap();
    let austin = filter_by_city(&ds, "Austin");

    assert_eq!(mean_rate_by_bedroom(&austin, "1"), Some(120.0));
    assert_eq!(mean_rate_by_bedroom(&austin, "Studio"), Some(75.0));
    assert_eq!(mean_rate_by_bedroom(&austin, "2"), Some(210.0));
    assert_eq!(mean_rate_by_bedroom(&austin, "3"), None);
}

#[test]
fn filtering_by_every_city_partitions_the_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            "0,$100,1,Austin,May 2016,,30.2,-97.7,A,https://a",
            "1,$90,1,Houston,May 2016,,29.7,-95.3,B,https://b",
            "2,$80,2, Austin,May 2016,,30.2,-97.7,C,https://c",
            "3,,3,Austin,May 2016,,30.2,-97.7,D,https://d",
            "4,$60,Studio,Dallas,May 2016,,32.7,-96.7,E,https://e",
        ],
    );
    let ds = load_file(&path, ParsePolicy::Skip).unwrap();

    let cities = distinct_cities(&ds);
    assert_eq!(cities, ["Austin", "Houston", " Austin", "Dallas"]);

    let mut seen = Vec::new();
    for city in cities {
        for listing in filter_by_city(&ds, city) {
            assert_eq!(listing.city(), city);
            seen.push(listing as *const Listing);
        }
    }
    assert_eq!(seen.len(), ds.len());
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), ds.len());
}

#[test]
fn raw_city_matching_is_preserved_over_normalized_matching() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            "0,$100,1,Austin,May 2016,,30.2,-97.7,A,https://a",
            "1,$80,1,AUSTIN ,May 2016,,30.2,-97.7,B,https://b",
        ],
    );
    let ds = load_file(&path, ParsePolicy::Skip).unwrap();

    assert_eq!(filter_by_city(&ds, "Austin").len(), 1);
    assert!(ds
        .listings()
        .iter()
        .all(|l| l.city_normalized() == "austin"));
}

#[test]
fn first_listing_and_empty_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            "0,$100,1,Austin,May 2016,first,30.2,-97.7,A,https://a",
            "1,$80,1,Austin,May 2016,second,30.2,-97.7,B,https://b",
        ],
    );
    let ds = load_file(&path, ParsePolicy::Skip).unwrap();

    let austin = filter_by_city(&ds, "Austin");
    assert_eq!(first_listing(&austin).unwrap().description(), Some("first"));

    let nowhere = filter_by_city(&ds, "Nowhere");
    assert_eq!(first_listing(&nowhere).unwrap_err(), EmptyResultError);
}

#[test]
fn skip_and_abort_policies_on_the_same_file() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            "0,$100,1,Austin,May 2016,,30.2,-97.7,A,https://a",
            "1,$1,200,2,Austin,May 2016,,30.2,-97.7,B,https://b",
        ],
    );

    // the unquoted thousands separator shifts the row: a CSV-level error
    let err = load_file(&path, ParsePolicy::Skip).unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)));

    let path = write_csv(
        &dir,
        &[
            "0,$100,1,Austin,May 2016,,30.2,-97.7,A,https://a",
            "1,\"$1,200\",2,Austin,May 2016,,30.2,-97.7,B,https://b",
            "2,$90,2,Austin,May 2016,,north,-97.7,C,https://c",
        ],
    );
    let ds = load_file(&path, ParsePolicy::Skip).unwrap();
    assert_eq!(ds.len(), 1);
    let rows: Vec<usize> = ds.rejected().iter().map(|r| r.row).collect();
    assert_eq!(rows, vec![1, 2]);

    let err = load_file(&path, ParsePolicy::Abort).unwrap_err();
    assert!(matches!(err, LoadError::Parse { row: 1, .. }));
}

#[test]
fn json_export_loads_into_the_same_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "listings.json",
        r#"[{"title": "A", "description": "Nice", "url": "https://a", "city": "Austin",
             "bedrooms_count": "2", "average_rate_per_night": "$150",
             "date_of_listing": "March 2017", "latitude": 30.2, "longitude": -97.7}]"#,
    );
    let ds = load_file(&path, ParsePolicy::Skip).unwrap();
    let listing = &ds.listings()[0];
    assert_eq!(listing.listing_month(), "March");
    assert_eq!(listing.listing_year(), 2017);
    assert_eq!(listing.average_rate_per_night_dollar(), Some(150.0));
}

#[test]
fn sessions_share_one_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            "0,$100,1,Austin,May 2016,,30.2,-97.7,A,https://a",
            "1,$90,1,Houston,May 2016,,29.7,-95.3,B,https://b",
        ],
    );
    let config = DashConfig {
        source: path,
        ..DashConfig::default()
    };
    let dataset = Arc::new(load_file(&config.source, config.parse_policy).unwrap());

    let handles: Vec<_> = ["Austin", "Houston", "Dallas"]
        .into_iter()
        .map(|city| {
            let mut state = DashState::new(Arc::clone(&dataset), &config);
            std::thread::spawn(move || {
                state.select_city(city);
                state.map().unwrap().selected
            })
        })
        .collect();
    let selected: Vec<SelectedProperty> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(matches!(&selected[0], SelectedProperty::Card(card) if card.title == "A"));
    assert!(matches!(&selected[1], SelectedProperty::Card(card) if card.title == "B"));
    assert!(matches!(&selected[2], SelectedProperty::NoData { .. }));
    assert_eq!(dataset.len(), 2);
}
