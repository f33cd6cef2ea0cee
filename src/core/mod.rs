// Core algorithm exports
pub mod chain;
pub mod curation;
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod reference;

pub use chain::{normalize, find_chain, chain_terms, ChainExpansion};
pub use distance::{haversine_distance, distance_between, format_distance};
pub use filters::{matches_terms, matches_text};
pub use matcher::{Matcher, NearbyDefaults, NearbyResult, SearchResult, rank, rerank, clamp_max_miles, clamp_limit};
pub use reference::{parse_reference, ReferenceError, ReferenceLocation, LocationStatus, SearchSession, DEFAULT_FALLBACK};
