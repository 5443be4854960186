//! Data preparation and query core for the Texas rentals dashboard.
//!
//! The listings file is loaded once into an immutable [`Dataset`], shared as
//! an `Arc`, and queried per selection through [`data::query`] and the page
//! view models in [`views`].

pub mod config;
pub mod data;
pub mod state;
pub mod views;

pub use config::{DashConfig, ParsePolicy};
pub use data::error::{EmptyResultError, LoadError, ParseError};
pub use data::loader::{load_csv_reader, load_file, load_json_reader};
pub use data::model::{Dataset, Listing, RejectedRecord};
pub use state::DashState;
