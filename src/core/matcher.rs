use std::cmp::Ordering;

use crate::models::{ChainBrand, Coordinate, RankedResult, Venue};
use crate::core::{
    chain::{self, ChainExpansion},
    distance::distance_between,
    filters::{matches_terms, matches_text},
};

/// Smallest and largest radius accepted by `nearby`, in miles
pub const MIN_NEARBY_MILES: f64 = 0.1;
pub const MAX_NEARBY_MILES: f64 = 25.0;

/// Smallest and largest result count accepted by `nearby`
pub const MIN_NEARBY_LIMIT: usize = 1;
pub const MAX_NEARBY_LIMIT: usize = 20;

/// Result of the search pipeline
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub results: Vec<RankedResult>,
    /// Chain brand the query was expanded from
    pub chain: Option<String>,
    /// False when the query was blank and nothing was searched
    pub query_issued: bool,
}

/// Result of a proximity-only lookup, with the bounds actually applied
#[derive(Debug, Clone)]
pub struct NearbyResult {
    pub results: Vec<RankedResult>,
    pub max_miles: f64,
    pub limit: usize,
}

/// Defaults applied to `nearby` when the caller leaves a bound out
#[derive(Debug, Clone, Copy)]
pub struct NearbyDefaults {
    pub max_miles: f64,
    pub limit: usize,
}

impl Default for NearbyDefaults {
    fn default() -> Self {
        Self {
            max_miles: 1.0,
            limit: 10,
        }
    }
}

/// Search orchestrator - resolves chains, matches, measures and ranks
///
/// # Pipeline Stages
/// 1. Blank query short-circuit
/// 2. Chain expansion or plain text matching
/// 3. Haversine distance from the reference point
/// 4. Stable sort by ascending distance
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    nearby_defaults: NearbyDefaults,
}

impl Matcher {
    pub fn new(nearby_defaults: NearbyDefaults) -> Self {
        Self {
            nearby_defaults: NearbyDefaults {
                max_miles: clamp_max_miles(nearby_defaults.max_miles),
                limit: clamp_limit(i64::try_from(nearby_defaults.limit).unwrap_or(i64::MAX)),
            },
        }
    }

    pub fn nearby_defaults(&self) -> NearbyDefaults {
        self.nearby_defaults
    }

    /// Search the catalog for venues matching a free-text query
    ///
    /// # Arguments
    /// * `query` - Raw user query
    /// * `reference` - Point distances are measured from
    /// * `venues` - Venue catalog
    /// * `chains` - Known chain brands
    ///
    /// # Returns
    /// SearchResult with venues sorted by ascending distance
    pub fn search(
        &self,
        query: &str,
        reference: Coordinate,
        venues: &[Venue],
        chains: &[ChainBrand],
    ) -> SearchResult {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return SearchResult::default();
        }

        let expansion = chain::resolve(chains, &q);

        let candidates = venues.iter().filter(|venue| match &expansion {
            Some(ChainExpansion { terms, .. }) => matches_terms(venue, terms),
            None => matches_text(venue, &q),
        });

        let results = rank(reference, candidates);

        tracing::debug!(
            "Query {:?} matched {} venues (chain: {:?})",
            q,
            results.len(),
            expansion.as_ref().map(|e| e.brand.as_str())
        );

        SearchResult {
            results,
            chain: expansion.map(|e| e.brand),
            query_issued: true,
        }
    }

    /// Find the closest venues regardless of query
    ///
    /// `max_miles` is clamped to [0.1, 25] and `limit` to [1, 20]; `None`
    /// falls back to the configured defaults.
    pub fn nearby(
        &self,
        reference: Coordinate,
        venues: &[Venue],
        max_miles: Option<f64>,
        limit: Option<i64>,
    ) -> NearbyResult {
        let max_miles = max_miles
            .map(clamp_max_miles)
            .unwrap_or(self.nearby_defaults.max_miles);
        let limit = limit
            .map(clamp_limit)
            .unwrap_or(self.nearby_defaults.limit);

        let mut results = rank(reference, venues.iter());
        results.retain(|r| r.distance <= max_miles);
        results.truncate(limit);

        NearbyResult {
            results,
            max_miles,
            limit,
        }
    }
}

/// Measure every venue from `reference` and sort by ascending distance
///
/// The sort is stable, so equidistant venues keep catalog order.
pub fn rank<'a, I>(reference: Coordinate, venues: I) -> Vec<RankedResult>
where
    I: IntoIterator<Item = &'a Venue>,
{
    let mut results: Vec<RankedResult> = venues
        .into_iter()
        // Loader already drops these; keep the invariant local too
        .filter(|venue| venue.has_address())
        .map(|venue| RankedResult {
            distance: distance_between(reference, venue.coordinate()),
            venue: venue.clone(),
        })
        .collect();

    sort_by_distance(&mut results);
    results
}

/// Recompute distances from a new reference point and re-sort
pub fn rerank(results: &mut [RankedResult], reference: Coordinate) {
    for result in results.iter_mut() {
        result.distance = distance_between(reference, result.venue.coordinate());
    }
    sort_by_distance(results);
}

fn sort_by_distance(results: &mut [RankedResult]) {
    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
    });
}

/// Clamp a requested radius into the accepted range
///
/// Zero or NaN falls back to one mile before clamping.
pub fn clamp_max_miles(max_miles: f64) -> f64 {
    let miles = if max_miles.is_nan() || max_miles == 0.0 { 1.0 } else { max_miles };
    miles.clamp(MIN_NEARBY_MILES, MAX_NEARBY_MILES)
}

/// Clamp a requested result count into the accepted range
///
/// Zero falls back to ten before clamping.
pub fn clamp_limit(limit: i64) -> usize {
    let limit = if limit == 0 { 10 } else { limit };
    limit.clamp(MIN_NEARBY_LIMIT as i64, MAX_NEARBY_LIMIT as i64) as usize
}
