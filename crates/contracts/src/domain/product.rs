use serde::{Deserialize, Serialize};

/// Tracked product as the backend reports it.
///
/// Field names on the wire keep the backend's spelling (`URL`,
/// `currentPrice`, `ogPrice`). The record is display-only on the
/// frontend: it is rendered as-is and never mutated or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,

    pub name: String,

    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "currentPrice")]
    pub current_price: f64,

    #[serde(rename = "ogPrice")]
    pub og_price: f64,
}

/// Body of `POST /remove_row`.
///
/// The backend keys removal on the displayed product name; no other
/// fields of the row are transmitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_record_uses_backend_field_spelling() {
        let json = r#"{
            "id": "7",
            "name": "Headphones",
            "URL": "https://mediamarkt.nl/x",
            "currentPrice": 49.9,
            "ogPrice": 59
        }"#;

        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.name, "Headphones");
        assert_eq!(record.url, "https://mediamarkt.nl/x");
        assert_eq!(record.current_price, 49.9);
        assert_eq!(record.og_price, 59.0);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["URL"], "https://mediamarkt.nl/x");
        assert_eq!(back["currentPrice"], 49.9);
        assert_eq!(back["ogPrice"], 59.0);
    }

    #[test]
    fn removal_request_serializes_name_only() {
        let body = RemovalRequest {
            name: "Headphones".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"Headphones"}"#
        );
    }
}
