//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use rental_dash::config::{DEFAULT_HISTOGRAM_BINS, DEFAULT_SOURCE};
use rental_dash::{DashConfig, ParsePolicy};

/// Texas rentals dashboard: load the listings once and print each page.
#[derive(Parser)]
#[command(name = "rental-dash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Listings file (CSV or JSON records)
    #[arg(long, value_name = "FILE", env = "RENTAL_DASH_DATA", default_value = DEFAULT_SOURCE)]
    pub data: PathBuf,

    /// What to do with a record that fails to normalize
    #[arg(long, env = "RENTAL_DASH_ON_PARSE_ERROR", default_value = "skip")]
    pub on_parse_error: ParsePolicyChoice,

    /// Bins in the rate-per-night histogram
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub bins: usize,

    /// City for the overview and map pages (default: first city)
    #[arg(long)]
    pub city: Option<String>,

    /// Two cities for the comparison page (default: first two cities)
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub compare: Option<Vec<String>>,

    /// Print the page view models as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ParsePolicyChoice {
    /// Leave bad records out and keep loading
    Skip,
    /// Fail the load on the first bad record
    Abort,
}

impl From<ParsePolicyChoice> for ParsePolicy {
    fn from(choice: ParsePolicyChoice) -> Self {
        match choice {
            ParsePolicyChoice::Skip => ParsePolicy::Skip,
            ParsePolicyChoice::Abort => ParsePolicy::Abort,
        }
    }
}

impl Cli {
    pub fn config(&self) -> DashConfig {
        DashConfig {
            source: self.data.clone(),
            parse_policy: self.on_parse_error.into(),
            histogram_bins: self.bins,
        }
    }
}
