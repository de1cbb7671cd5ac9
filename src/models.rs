//! Profile card data model.
//!
//! Hosts fetch candidate snapshots from whatever store they use; the engine
//! only cares about the searchable fields. Any textual field may be missing
//! in real data, so every optional field carries a serde default and sparse
//! JSON records deserialize without complaint. Field names stay camelCase on
//! the wire to match the upstream card documents.

use serde::{Deserialize, Serialize};

/// Business details attached to a profile card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// A single business-card profile eligible to appear in search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub display_name: String,
    /// Unique per profile, case-insensitive.
    pub username: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub business: Option<BusinessInfo>,
    /// Editorial/promotion flag assigned outside the engine. Top-ranked
    /// cards get a scoring boost and serve as the last-resort result set.
    #[serde(default)]
    pub is_top_ranked: bool,
}

impl ProfileCard {
    /// Card with just the identity fields set; everything else empty.
    pub fn new(display_name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            username: username.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_json_record_deserializes() {
        let card: ProfileCard =
            serde_json::from_str(r#"{"displayName":"Mia Chen","username":"mia"}"#).unwrap();
        assert_eq!(card.display_name, "Mia Chen");
        assert_eq!(card.title, None);
        assert_eq!(card.bio, "");
        assert!(card.business.is_none());
        assert!(!card.is_top_ranked);
    }

    #[test]
    fn business_fields_roundtrip_camel_case() {
        let json = r#"{
            "displayName": "Mia Chen",
            "username": "mia",
            "business": {"companyName": "Chen Studio", "skills": ["figma"]}
        }"#;
        let card: ProfileCard = serde_json::from_str(json).unwrap();
        let business = card.business.as_ref().unwrap();
        assert_eq!(business.company_name.as_deref(), Some("Chen Studio"));
        assert_eq!(business.skills, vec!["figma"]);
        assert!(business.services.is_empty());

        let out = serde_json::to_string(&card).unwrap();
        assert!(out.contains("\"companyName\""));
        assert!(out.contains("\"isTopRanked\""));
    }
}
