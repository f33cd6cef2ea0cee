use crate::models::Venue;

/// Check if a venue matches any of the chain expansion terms
///
/// Only cuisine and types are consulted; the venue name is ignored so a
/// brand query surfaces local places serving the same food.
#[inline]
pub fn matches_terms(venue: &Venue, terms: &[String]) -> bool {
    let cuisine = venue.cuisine.to_lowercase();
    let types: Vec<String> = venue.types.iter().map(|t| t.to_lowercase()).collect();

    terms.iter().any(|term| {
        cuisine.contains(term.as_str()) || types.iter().any(|t| t.contains(term.as_str()))
    })
}

/// Check if a venue matches a plain text query
///
/// `query` must already be trimmed and lowercased. Matches against the
/// name, the cuisine, or the space-joined types.
#[inline]
pub fn matches_text(venue: &Venue, query: &str) -> bool {
    if venue.name.to_lowercase().contains(query) {
        return true;
    }

    if venue.cuisine.to_lowercase().contains(query) {
        return true;
    }

    venue.types.join(" ").to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceTier;

    fn create_test_venue(name: &str, cuisine: &str, types: &[&str]) -> Venue {
        Venue {
            id: 1,
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            lat: 37.77,
            lng: -122.42,
            price: PriceTier::Low,
            address: "1 Main St".to_string(),
            photo: None,
        }
    }

    #[test]
    fn test_terms_match_cuisine() {
        let venue = create_test_venue("Casa Luna", "Mexican", &[]);
        assert!(matches_terms(&venue, &["mexican".to_string()]));
    }

    #[test]
    fn test_terms_match_type_substring() {
        let venue = create_test_venue("Casa Luna", "", &["Street Tacos"]);
        assert!(matches_terms(&venue, &["tacos".to_string()]));
    }

    #[test]
    fn test_terms_ignore_name() {
        let venue = create_test_venue("Taco Palace", "Seafood", &["fish"]);
        assert!(!matches_terms(&venue, &["taco".to_string()]));
        assert!(!matches_terms(&venue, &[]));
    }

    #[test]
    fn test_text_matches_name() {
        let venue = create_test_venue("Mama Rosa's", "Italian", &["pasta"]);
        assert!(matches_text(&venue, "rosa"));
    }

    #[test]
    fn test_text_matches_joined_types() {
        let venue = create_test_venue("Thai Orchid", "Thai", &["curry", "pad", "thai"]);
        // Spans two adjacent tags once joined with a space
        assert!(matches_text(&venue, "pad thai"));
        assert!(!matches_text(&venue, "sushi"));
    }
}
