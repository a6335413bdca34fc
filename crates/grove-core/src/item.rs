use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A storefront catalog item, normalized from the remote API's inconsistent
/// payloads (or taken from the fixed fallback catalog).
///
/// After normalization every field holds a usable value: `name`, `category`,
/// `description`, and `image` are non-empty, `price` is non-negative and
/// finite, and `id` is present (synthetic when the payload had none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Item identifier, stored as a string whether the API sent a string or
    /// an integer. Used to correlate cart lines with catalog entries.
    pub id: String,
    pub name: String,
    /// Short description shown on the card.
    pub description: String,
    /// Longer detail text, when the API provides one.
    pub long_description: Option<String>,
    /// Free-text category label as the API reports it (e.g., `"Fruit Tree"`).
    pub category: String,
    /// Image URL; a fixed placeholder when the payload had none.
    pub image: String,
    /// Display price. Non-negative and finite by construction.
    pub price: Decimal,
    /// Tags as sent by the API. Empty for most endpoints.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    /// Concatenation of every text field the keyword resolver matches
    /// against, lowercased. Category first so category-label hits win
    /// cheaply during substring scans.
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.category.len() + self.name.len() + self.description.len() + 16,
        );
        text.push_str(&self.category);
        text.push(' ');
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(&self.description);
        if let Some(long) = &self.long_description {
            text.push(' ');
            text.push_str(long);
        }
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }
}

/// Identifier for a category: either assigned by the server or a fixed
/// local slug from the curated category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// Server-assigned id, passed back as a path parameter.
    Server(String),
    /// Fixed local slug (e.g., `"fruit-trees"`), resolved to keywords.
    Slug(String),
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryId::Server(id) | CategoryId::Slug(id) => write!(f, "{id}"),
        }
    }
}

/// A selectable category, from the server's category list or the static
/// local table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    /// Lowercase keywords for local matching. Empty for server categories
    /// with no local table entry.
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item() -> CatalogItem {
        CatalogItem {
            id: "42".to_string(),
            name: "Mango Tree".to_string(),
            description: "Bears sweet fruit.".to_string(),
            long_description: Some("Thrives in full sun.".to_string()),
            category: "Fruit Trees".to_string(),
            image: "https://i.ibb.co/x1/mango.jpg".to_string(),
            price: Decimal::new(500, 0),
            tags: vec!["Tropical".to_string()],
        }
    }

    #[test]
    fn search_text_concatenates_all_text_fields_lowercased() {
        let text = make_item().search_text();
        assert!(text.contains("fruit trees"));
        assert!(text.contains("mango tree"));
        assert!(text.contains("bears sweet fruit"));
        assert!(text.contains("thrives in full sun"));
        assert!(text.contains("tropical"));
    }

    #[test]
    fn search_text_omits_absent_long_description() {
        let mut item = make_item();
        item.long_description = None;
        assert!(!item.search_text().contains("thrives"));
    }

    #[test]
    fn category_id_display_is_the_raw_identifier() {
        assert_eq!(CategoryId::Server("7".to_string()).to_string(), "7");
        assert_eq!(
            CategoryId::Slug("fruit-trees".to_string()).to_string(),
            "fruit-trees"
        );
    }

    #[test]
    fn serde_roundtrip_item() {
        let item = make_item();
        let json = serde_json::to_string(&item).expect("serialization failed");
        let decoded: CatalogItem = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, item);
    }
}
