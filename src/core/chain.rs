use crate::models::ChainBrand;

/// Normalize a string for brand comparison
///
/// Trims, lowercases and strips apostrophe-like characters so that
/// "McDonald's", "mcdonald’s" and "MCDONALDS" compare equal.
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}' | '\u{2018}' | '`'))
        .collect()
}

/// Find the first chain brand whose name overlaps the query
///
/// A brand matches when its normalized name equals the normalized query,
/// contains it, or is contained in it. The first match in catalog order
/// wins, not the closest one: a short query like "taco" resolves to
/// whichever taco brand is listed first.
pub fn find_chain<'a>(chains: &'a [ChainBrand], query: &str) -> Option<&'a ChainBrand> {
    let nq = normalize(query);
    if nq.is_empty() {
        return None;
    }

    chains.iter().find(|chain| {
        let name = normalize(&chain.name);
        // An unnamed brand would otherwise be contained in every query
        !name.is_empty() && (name == nq || name.contains(&nq) || nq.contains(&name))
    })
}

/// Build the deduplicated match terms for a chain brand
///
/// Terms keep first-seen order: cuisine first, then each type.
pub fn chain_terms(chain: &ChainBrand) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(chain.types.len() + 1);

    for raw in std::iter::once(&chain.cuisine).chain(chain.types.iter()) {
        let term = normalize(raw);
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }

    terms
}

/// Result of resolving a query against the chain list
#[derive(Debug, Clone, PartialEq)]
pub struct ChainExpansion {
    pub brand: String,
    pub terms: Vec<String>,
}

/// Resolve a raw query into chain expansion terms, if it names a known brand
pub fn resolve(chains: &[ChainBrand], query: &str) -> Option<ChainExpansion> {
    find_chain(chains, query).map(|chain| ChainExpansion {
        brand: chain.name.clone(),
        terms: chain_terms(chain),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(name: &str, cuisine: &str, types: &[&str]) -> ChainBrand {
        ChainBrand {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_normalize_strips_apostrophes() {
        assert_eq!(normalize("  McDonald's "), "mcdonalds");
        assert_eq!(normalize("McDonald\u{2019}s"), "mcdonalds");
        assert_eq!(normalize("Dunkin`"), "dunkin");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_find_chain_equal_and_contained() {
        let chains = vec![
            brand("Taco Bell", "Mexican", &["tacos", "fast food"]),
            brand("McDonald's", "Burger", &["burger", "fast food"]),
        ];

        assert_eq!(find_chain(&chains, "TACO BELL").unwrap().name, "Taco Bell");
        // Query contained in brand name
        assert_eq!(find_chain(&chains, "mcdon").unwrap().name, "McDonald's");
        // Brand name contained in query
        assert_eq!(find_chain(&chains, "mcdonalds near me").unwrap().name, "McDonald's");
        assert!(find_chain(&chains, "sushi").is_none());
    }

    #[test]
    fn test_find_chain_first_match_wins() {
        let chains = vec![
            brand("Taco Cabana", "Mexican", &["tex-mex"]),
            brand("Taco Bell", "Mexican", &["tacos"]),
        ];

        assert_eq!(find_chain(&chains, "taco").unwrap().name, "Taco Cabana");
    }

    #[test]
    fn test_empty_query_resolves_nothing() {
        let chains = vec![brand("Subway", "Sandwich", &["sandwich"])];
        assert!(resolve(&chains, "   ").is_none());
        assert!(resolve(&chains, "''").is_none());
    }

    #[test]
    fn test_chain_terms_dedup_and_drop_empty() {
        let chain = brand("Chipotle", "Mexican", &["mexican", "burritos", "", " Bowls "]);
        assert_eq!(chain_terms(&chain), vec!["mexican", "burritos", "bowls"]);
    }

    #[test]
    fn test_unnamed_brand_never_matches() {
        let chains = vec![brand("", "Pizza", &["pizza"])];
        assert!(find_chain(&chains, "anything").is_none());
    }
}
