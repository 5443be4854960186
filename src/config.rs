use std::path::PathBuf;

/// Source path used when none is configured.
pub const DEFAULT_SOURCE: &str = "data/Airbnb_Texas_Rentals.csv";

/// Bins in the rate-per-night histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// What the loader does with a record whose fields fail to normalize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Log a warning, leave the record out, keep loading.
    #[default]
    Skip,
    /// Fail the whole load on the first bad record.
    Abort,
}

/// Configuration values the dashboard core consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    /// CSV or JSON file with the listings.
    pub source: PathBuf,
    pub parse_policy: ParsePolicy,
    pub histogram_bins: usize,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            parse_policy: ParsePolicy::default(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}
