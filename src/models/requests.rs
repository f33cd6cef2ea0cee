use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string for the search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
}

/// Query string for the proximity-only endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NearbyParams {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
    /// Raw radius; parsed leniently by `max_miles()`
    #[serde(alias = "max_miles", rename = "maxMiles")]
    pub max_miles: Option<String>,
    /// Raw result count; parsed leniently by `limit()`
    pub limit: Option<String>,
}

impl NearbyParams {
    /// Requested radius in miles; a non-numeric value counts as absent
    pub fn max_miles(&self) -> Option<f64> {
        self.max_miles.as_deref().and_then(parse_number)
    }

    /// Requested result count, truncated to a whole number
    ///
    /// A non-numeric value counts as absent.
    pub fn limit(&self) -> Option<i64> {
        self.limit
            .as_deref()
            .and_then(parse_number)
            .map(|n| n.trunc() as i64)
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nearby(max_miles: Option<&str>, limit: Option<&str>) -> NearbyParams {
        NearbyParams {
            lat: Some(37.7749),
            lng: Some(-122.4194),
            max_miles: max_miles.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_nearby_bounds_parse_leniently() {
        let params = nearby(Some(" 2.5 "), Some("2.5"));
        assert_eq!(params.max_miles(), Some(2.5));
        assert_eq!(params.limit(), Some(2));

        let params = nearby(Some("abc"), Some("ten"));
        assert_eq!(params.max_miles(), None);
        assert_eq!(params.limit(), None);

        let params = nearby(Some("NaN"), Some("-3.9"));
        assert_eq!(params.max_miles(), None);
        assert_eq!(params.limit(), Some(-3));

        assert_eq!(nearby(None, None).limit(), None);
    }
}
