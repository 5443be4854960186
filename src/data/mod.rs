//! Data layer: listing types, loading/normalization, and queries.
//!
//! Architecture:
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  rows → RawListing → normalize → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset   │  Vec<Listing> (immutable), city index
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  query    │  filter by city, first listing, aggregates
//!   └──────────┘
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod query;

#[cfg(test)]
pub(crate) mod fixtures;
