//! Scran It - search service for nearby, independently owned restaurants
//!
//! This library provides the search-and-rank pipeline behind the Scran It map:
//! chain-brand expansion, text matching and distance ranking over a flat
//! venue catalog.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, SearchSession, distance::{haversine_distance, format_distance}};
pub use models::{Venue, ChainBrand, RankedResult, Coordinate, SearchResponse, NearbyResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(format_distance(haversine_distance(0.0, 0.0, 0.0, 0.0)), "< 0.1 mi");
    }
}
