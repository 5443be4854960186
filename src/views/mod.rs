//! Page view models: what each dashboard page renders for a selection.
//!
//! ```text
//!   Arc<Dataset> ──► DashState (selected city, compared cities)
//!                        │
//!        ┌───────────────┼────────────────┐
//!        ▼               ▼                ▼
//!   OverviewView      MapView       ComparisonView
//!   histogram +     points +        mean rate per
//!   bedroom bars    property card   bedroom label
//! ```
//!
//! Every view is `Serialize`, and `Display` gives a plain-text rendering.

pub mod comparison;
pub mod map;
pub mod overview;

pub use comparison::{ComparisonRow, ComparisonView};
pub use map::{MapView, PropertyCard, SelectedProperty, NO_DATA_MESSAGE};
pub use overview::{BedroomCount, OverviewView};

/// `Some(12.5)` → `"12.50"`, `None` → `"-"`.
fn fmt_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("{r:.2}")).unwrap_or_else(|| "-".to_string())
}
