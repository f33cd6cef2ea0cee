use thiserror::Error;

use crate::models::{ChainBrand, Coordinate, RankedResult, Venue};
use crate::core::matcher::{rerank, Matcher};

/// Default reference point until a user location is known (San Francisco)
pub const DEFAULT_FALLBACK: Coordinate = Coordinate::new(37.7749, -122.4194);

/// Errors for caller-supplied reference coordinates
#[derive(Debug, Error, PartialEq)]
pub enum ReferenceError {
    #[error("lat and lng are required")]
    Missing,

    #[error("{0} is not a number")]
    NotNumeric(&'static str),

    #[error("{0} is out of range")]
    OutOfRange(&'static str),
}

/// Build a reference coordinate from optional request values
pub fn parse_reference(lat: Option<f64>, lng: Option<f64>) -> Result<Coordinate, ReferenceError> {
    let (lat, lng) = match (lat, lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => return Err(ReferenceError::Missing),
    };

    if !lat.is_finite() {
        return Err(ReferenceError::NotNumeric("lat"));
    }
    if !lng.is_finite() {
        return Err(ReferenceError::NotNumeric("lng"));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ReferenceError::OutOfRange("lat"));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(ReferenceError::OutOfRange("lng"));
    }

    Ok(Coordinate::new(lat, lng))
}

/// The point distances are currently measured from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceLocation {
    User(Coordinate),
    Fallback(Coordinate),
}

impl ReferenceLocation {
    pub fn coordinate(&self) -> Coordinate {
        match self {
            ReferenceLocation::User(c) | ReferenceLocation::Fallback(c) => *c,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, ReferenceLocation::User(_))
    }
}

/// Outcome of a geolocation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    Located,
    Fallback,
}

impl LocationStatus {
    pub fn message(&self) -> &'static str {
        match self {
            LocationStatus::Located => "Location found. Search for a type of food.",
            LocationStatus::Fallback => "Using default area. Enable location for results near you.",
        }
    }
}

/// Per-client search state: active reference point plus displayed results
#[derive(Debug, Clone)]
pub struct SearchSession {
    matcher: Matcher,
    reference: ReferenceLocation,
    query: String,
    results: Vec<RankedResult>,
}

impl SearchSession {
    pub fn new(matcher: Matcher, fallback: Coordinate) -> Self {
        Self {
            matcher,
            reference: ReferenceLocation::Fallback(fallback),
            query: String::new(),
            results: Vec::new(),
        }
    }

    pub fn reference(&self) -> ReferenceLocation {
        self.reference
    }

    pub fn results(&self) -> &[RankedResult] {
        &self.results
    }

    /// Run a search from the active reference and replace the held results
    pub fn run_search(&mut self, query: &str, venues: &[Venue], chains: &[ChainBrand]) -> &[RankedResult] {
        self.query = query.trim().to_string();
        let result = self
            .matcher
            .search(&self.query, self.reference.coordinate(), venues, chains);
        self.results = result.results;
        &self.results
    }

    /// Apply the geolocation outcome
    ///
    /// A reported position becomes the active reference and every held
    /// result is re-measured and re-sorted. No position keeps the current
    /// reference and is reported as a status.
    pub fn apply_geolocation(&mut self, position: Option<Coordinate>) -> LocationStatus {
        match position {
            Some(coordinate) => {
                self.reference = ReferenceLocation::User(coordinate);
                rerank(&mut self.results, coordinate);
                tracing::debug!("Reference switched to user location, {} results re-ranked", self.results.len());
                LocationStatus::Located
            }
            None => LocationStatus::Fallback,
        }
    }

    /// Text shown above the result list
    pub fn summary(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        match self.results.len() {
            0 => "No matches. Try another cuisine or dish.".to_string(),
            1 => "1 locally owned restaurant".to_string(),
            n => format!("{} locally owned restaurants", n),
        }
    }
}
