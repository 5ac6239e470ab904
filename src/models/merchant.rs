//! Merchant model.

use serde::{Deserialize, Serialize};

use super::MerchantId;

/// A merchant looked up by `GET /merchants/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// Unique identifier (hex object id).
    #[serde(rename = "_id")]
    pub id: MerchantId,
    /// Merchant display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_merchant() {
        let json = r#"{
            "_id": "m-001",
            "name": "Blue Bottle Coffee"
        }"#;
        let merchant: Merchant = serde_json::from_str(json).unwrap();
        assert_eq!(merchant.id, MerchantId::new("m-001".to_owned()));
        assert_eq!(merchant.name, "Blue Bottle Coffee");
    }

    #[test]
    fn serialize_roundtrip() {
        let merchant = Merchant {
            id: MerchantId::new("m-2".to_owned()),
            name: "Metro".to_owned(),
        };
        let json = serde_json::to_string(&merchant).unwrap();
        let deserialized: Merchant = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, merchant);
    }
}
