// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Venue, ChainBrand, RankedResult, Coordinate, PriceTier};
pub use requests::{SearchParams, NearbyParams};
pub use responses::{SearchResponse, NearbyResponse, ResultView, SearchStatus, ReferenceKind, HealthResponse, ErrorResponse};
