//! Envelope types for the remote catalog API.
//!
//! ## Observed response shapes
//!
//! The API wraps the same item payload in different envelopes depending on
//! endpoint and version. Item lists arrive as one of:
//!
//! - `{"status": true, "data": {"plants": [...]}}`
//! - `{"status": true, "data": [...]}`
//! - `{"plants": [...]}`
//! - a bare array `[...]`
//!
//! Single-item detail responses arrive as `{"status": true, "data": {...}}`,
//! `{"plants": {...}}` (the live detail endpoint nests the object under
//! `plants`), or a bare object.
//!
//! Each shape is an explicit variant of an untagged union, tried in
//! declaration order; a JSON body matching none of them is a
//! [`CatalogError::ShapeMismatch`](crate::error::CatalogError::ShapeMismatch)
//! rather than a silent wrong-field read.
//!
//! ## Field inconsistencies
//!
//! Items themselves are no more consistent than their envelopes: `id` may be
//! a string or an integer, `price` a number or a numeric string, and several
//! fields go by more than one name (`category` / `category_name`,
//! `description` / `short_description`, `image` / `img`). Every field is
//! optional here; [`crate::normalize`] erases the gaps.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CatalogError;

/// A catalog item exactly as the API sends it, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub id: Option<IdValue>,

    #[serde(default)]
    pub name: Option<String>,

    /// Short card description. Some payloads call it `short_description`.
    #[serde(default, alias = "short_description")]
    pub description: Option<String>,

    /// Longer detail text, under `details` on some endpoints.
    #[serde(default, alias = "details")]
    pub long_description: Option<String>,

    /// Category label. The category-list endpoint uses `category_name` for
    /// the same data.
    #[serde(default, alias = "category_name")]
    pub category: Option<String>,

    #[serde(default, alias = "img")]
    pub image: Option<String>,

    #[serde(default)]
    pub price: Option<PriceValue>,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Item id as sent by the API: integer on newer endpoints, string on older
/// ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

/// Price as sent by the API: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

/// The four observed list envelopes, tried in order. First structural match
/// wins.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope {
    /// `{"status": .., "data": {"plants": [...]}}` or `{"status": .., "data": [...]}`.
    DataWrapped { data: DataSection },
    /// `{"plants": [...]}`.
    Plants { plants: Vec<RawItem> },
    /// Bare array.
    Bare(Vec<RawItem>),
}

/// The two shapes observed under a `data` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DataSection {
    Plants { plants: Vec<RawItem> },
    Items(Vec<RawItem>),
}

impl ListEnvelope {
    /// Erases the envelope, yielding the item sequence in payload order.
    #[must_use]
    pub fn into_items(self) -> Vec<RawItem> {
        match self {
            ListEnvelope::DataWrapped {
                data: DataSection::Plants { plants },
            }
            | ListEnvelope::Plants { plants }
            | ListEnvelope::Bare(plants)
            | ListEnvelope::DataWrapped {
                data: DataSection::Items(plants),
            } => plants,
        }
    }
}

/// The observed single-item detail envelopes, tried in order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DetailEnvelope {
    /// `{"status": .., "data": {...}}`.
    DataWrapped { data: RawItem },
    /// `{"plants": {...}}` — the live detail endpoint's quirk.
    Plants { plants: RawItem },
    /// Bare object.
    Bare(RawItem),
}

impl DetailEnvelope {
    #[must_use]
    pub fn into_item(self) -> RawItem {
        match self {
            DetailEnvelope::DataWrapped { data: item }
            | DetailEnvelope::Plants { plants: item }
            | DetailEnvelope::Bare(item) => item,
        }
    }
}

/// `GET /categories` response.
#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Vec<RawCategory>,
}

/// A server-side category entry. The label field is `category` on some
/// API versions and `category_name` on others.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub id: Option<IdValue>,
    #[serde(default, alias = "category_name")]
    pub category: Option<String>,
}

/// Parses a response body into the item sequence, distinguishing "not JSON"
/// from "JSON, but no known envelope".
///
/// # Errors
///
/// - [`CatalogError::Deserialize`] — the body is not valid JSON.
/// - [`CatalogError::ShapeMismatch`] — valid JSON matching none of the
///   known list shapes.
pub fn parse_list(body: &str, context: &str) -> Result<Vec<RawItem>, CatalogError> {
    let value: Value = serde_json::from_str(body).map_err(|e| CatalogError::Deserialize {
        context: context.to_string(),
        source: e,
    })?;
    let envelope: ListEnvelope =
        serde_json::from_value(value).map_err(|_| CatalogError::ShapeMismatch {
            context: context.to_string(),
        })?;
    Ok(envelope.into_items())
}

/// Parses a single-item detail body. Same error split as [`parse_list`].
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] or [`CatalogError::ShapeMismatch`].
pub fn parse_detail(body: &str, context: &str) -> Result<RawItem, CatalogError> {
    let value: Value = serde_json::from_str(body).map_err(|e| CatalogError::Deserialize {
        context: context.to_string(),
        source: e,
    })?;
    let envelope: DetailEnvelope =
        serde_json::from_value(value).map_err(|_| CatalogError::ShapeMismatch {
            context: context.to_string(),
        })?;
    Ok(envelope.into_item())
}

/// Parses a category-list body. Same error split as [`parse_list`].
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] or [`CatalogError::ShapeMismatch`].
pub fn parse_categories(body: &str, context: &str) -> Result<Vec<RawCategory>, CatalogError> {
    let value: Value = serde_json::from_str(body).map_err(|e| CatalogError::Deserialize {
        context: context.to_string(),
        source: e,
    })?;
    let envelope: CategoriesEnvelope =
        serde_json::from_value(value).map_err(|_| CatalogError::ShapeMismatch {
            context: context.to_string(),
        })?;
    Ok(envelope.categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: &str = r#"{"id": 1, "name": "Mango Tree", "price": 500}"#;

    fn item_names(items: &[RawItem]) -> Vec<&str> {
        items.iter().filter_map(|i| i.name.as_deref()).collect()
    }

    #[test]
    fn parse_list_handles_data_plants_object() {
        let body = format!(r#"{{"status": true, "data": {{"plants": [{ITEM}]}}}}"#);
        let items = parse_list(&body, "test").unwrap();
        assert_eq!(item_names(&items), vec!["Mango Tree"]);
    }

    #[test]
    fn parse_list_handles_data_array() {
        let body = format!(r#"{{"status": true, "data": [{ITEM}]}}"#);
        let items = parse_list(&body, "test").unwrap();
        assert_eq!(item_names(&items), vec!["Mango Tree"]);
    }

    #[test]
    fn parse_list_handles_plants_array() {
        let body = format!(r#"{{"plants": [{ITEM}]}}"#);
        let items = parse_list(&body, "test").unwrap();
        assert_eq!(item_names(&items), vec!["Mango Tree"]);
    }

    #[test]
    fn parse_list_handles_bare_array() {
        let body = format!("[{ITEM}]");
        let items = parse_list(&body, "test").unwrap();
        assert_eq!(item_names(&items), vec!["Mango Tree"]);
    }

    #[test]
    fn all_four_shapes_yield_the_same_items() {
        let bodies = [
            format!(r#"{{"status": true, "data": {{"plants": [{ITEM}]}}}}"#),
            format!(r#"{{"status": true, "data": [{ITEM}]}}"#),
            format!(r#"{{"plants": [{ITEM}]}}"#),
            format!("[{ITEM}]"),
        ];
        for body in &bodies {
            let items = parse_list(body, "test").unwrap();
            assert_eq!(items.len(), 1, "shape failed: {body}");
            assert_eq!(items[0].id, Some(IdValue::Number(1)));
            assert_eq!(items[0].name.as_deref(), Some("Mango Tree"));
        }
    }

    #[test]
    fn parse_list_rejects_non_json() {
        let err = parse_list("<html>oops</html>", "test").unwrap_err();
        assert!(matches!(err, CatalogError::Deserialize { .. }));
    }

    #[test]
    fn parse_list_rejects_unknown_shape() {
        let err = parse_list(r#"{"status": "ok", "count": 3}"#, "test").unwrap_err();
        assert!(matches!(err, CatalogError::ShapeMismatch { .. }));
    }

    #[test]
    fn raw_item_tolerates_string_id_and_string_price() {
        let body = r#"[{"id": "abc-7", "name": "Fern", "price": "120.50"}]"#;
        let items = parse_list(body, "test").unwrap();
        assert_eq!(items[0].id, Some(IdValue::Text("abc-7".to_string())));
        assert_eq!(
            items[0].price,
            Some(PriceValue::Text("120.50".to_string()))
        );
    }

    #[test]
    fn raw_item_honors_field_aliases() {
        let body = r#"[{"category_name": "Shade Trees", "short_description": "Wide canopy.", "img": "https://x/y.jpg", "details": "Grows tall."}]"#;
        let items = parse_list(body, "test").unwrap();
        let item = &items[0];
        assert_eq!(item.category.as_deref(), Some("Shade Trees"));
        assert_eq!(item.description.as_deref(), Some("Wide canopy."));
        assert_eq!(item.image.as_deref(), Some("https://x/y.jpg"));
        assert_eq!(item.long_description.as_deref(), Some("Grows tall."));
    }

    #[test]
    fn parse_detail_handles_data_wrapped_object() {
        let body = format!(r#"{{"status": true, "data": {ITEM}}}"#);
        let item = parse_detail(&body, "test").unwrap();
        assert_eq!(item.name.as_deref(), Some("Mango Tree"));
    }

    #[test]
    fn parse_detail_handles_plants_wrapped_object() {
        let body = format!(r#"{{"plants": {ITEM}}}"#);
        let item = parse_detail(&body, "test").unwrap();
        assert_eq!(item.name.as_deref(), Some("Mango Tree"));
    }

    #[test]
    fn parse_detail_handles_bare_object() {
        let item = parse_detail(ITEM, "test").unwrap();
        assert_eq!(item.name.as_deref(), Some("Mango Tree"));
    }

    #[test]
    fn parse_categories_accepts_either_label_field() {
        let body = r#"{"categories": [{"id": 1, "category": "Fruit Trees"}, {"id": 2, "category_name": "Shade Trees"}]}"#;
        let cats = parse_categories(body, "test").unwrap();
        assert_eq!(cats[0].category.as_deref(), Some("Fruit Trees"));
        assert_eq!(cats[1].category.as_deref(), Some("Shade Trees"));
    }
}
