use serde::{Deserialize, Deserializer, Serialize};

/// Relative price level of a venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceTier {
    #[default]
    #[serde(rename = "$")]
    Low,
    #[serde(rename = "$$")]
    Mid,
    #[serde(rename = "$$$")]
    High,
    #[serde(rename = "$$$$")]
    Premium,
}

impl PriceTier {
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceTier::Low => "$",
            PriceTier::Mid => "$$",
            PriceTier::High => "$$$",
            PriceTier::Premium => "$$$$",
        }
    }
}

/// A single restaurant location eligible for search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "tags_or_default")]
    pub types: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, deserialize_with = "price_or_default")]
    pub price: PriceTier,
    #[serde(default, deserialize_with = "string_or_default")]
    pub address: String,
    /// Optional photo URL attached during catalog enrichment
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "url_or_none")]
    pub photo: Option<String>,
}

impl Venue {
    /// A venue is searchable only once it carries a non-blank address
    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// A widespread brand kept out of the venue catalog, used to expand brand queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainBrand {
    pub name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "tags_or_default")]
    pub types: Vec<String>,
}

/// Venue with its distance from the active reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub venue: Venue,
    /// Great-circle distance in miles
    pub distance: f64,
}

/// Point in signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// Catalog files come from third-party data; nulls and odd shapes degrade to defaults.

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn tags_or_default<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                _ => String::new(),
            })
            .collect(),
        Some(serde_json::Value::String(s)) => vec![s],
        _ => Vec::new(),
    })
}

fn price_or_default<'de, D>(deserializer: D) -> Result<PriceTier, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value.as_ref().and_then(serde_json::Value::as_str).map(str::trim) {
        Some("$$") => PriceTier::Mid,
        Some("$$$") => PriceTier::High,
        Some("$$$$") => PriceTier::Premium,
        _ => PriceTier::Low,
    })
}

fn url_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_default() {
        let venue: Venue = serde_json::from_str(
            r#"{"id": 7, "name": "Corner Cafe", "lat": 30.2, "lng": -97.7}"#,
        )
        .unwrap();

        assert_eq!(venue.cuisine, "");
        assert!(venue.types.is_empty());
        assert_eq!(venue.price, PriceTier::Low);
        assert_eq!(venue.address, "");
        assert!(venue.photo.is_none());
        assert!(!venue.has_address());
    }

    #[test]
    fn test_null_fields_degrade() {
        let venue: Venue = serde_json::from_str(
            r#"{"id": 1, "name": "X", "cuisine": null, "types": ["tacos", null], "lat": 0, "lng": 0, "price": null, "address": "  "}"#,
        )
        .unwrap();

        assert_eq!(venue.cuisine, "");
        assert_eq!(venue.types, vec!["tacos".to_string(), String::new()]);
        assert!(!venue.has_address());
    }

    #[test]
    fn test_price_symbols() {
        let venue: Venue = serde_json::from_str(
            r#"{"id": 1, "name": "X", "lat": 0, "lng": 0, "price": "$$$", "address": "1 Main St"}"#,
        )
        .unwrap();

        assert_eq!(venue.price, PriceTier::High);
        assert_eq!(venue.price.symbol(), "$$$");
        assert!(venue.has_address());
    }

    #[test]
    fn test_ranked_result_flattens_venue() {
        let venue: Venue = serde_json::from_str(
            r#"{"id": 2, "name": "El Mercado", "lat": 37.771, "lng": -122.425, "address": "1 Main St"}"#,
        )
        .unwrap();
        let ranked = RankedResult { venue, distance: 0.5 };

        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["name"], "El Mercado");
        assert_eq!(json["distance"], 0.5);
        assert!(json.get("photo").is_none());
    }

    #[test]
    fn test_photo_carried_through() {
        let venue: Venue = serde_json::from_str(
            r#"{"id": 3, "name": "Sakura Kitchen", "lat": 37.782, "lng": -122.418, "address": "3 Geary St", "photo": "https://img.example/sakura.jpg"}"#,
        )
        .unwrap();

        assert_eq!(venue.photo.as_deref(), Some("https://img.example/sakura.jpg"));
        let json = serde_json::to_value(&venue).unwrap();
        assert_eq!(json["photo"], "https://img.example/sakura.jpg");
    }
}
