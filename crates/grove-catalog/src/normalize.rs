//! Normalization from [`RawItem`] to [`grove_core::CatalogItem`].
//!
//! Every hole the API leaves — missing fields, empty strings, string-typed
//! numbers — is filled with a fixed default here so nothing downstream ever
//! sees a partial item. Normalizing an already-complete item changes
//! nothing.

use grove_core::CatalogItem;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::envelope::{IdValue, PriceValue, RawItem};

pub const DEFAULT_NAME: &str = "Unknown Tree";
pub const DEFAULT_CATEGORY: &str = "Tree";
pub const DEFAULT_DESCRIPTION: &str =
    "A healthy nursery-grown plant, ready for its new home.";
pub const DEFAULT_IMAGE: &str = "https://i.ibb.co/fallback/green-tree.jpg";

/// Placeholder price used when the payload's price is absent, non-numeric,
/// negative, or non-finite.
#[must_use]
pub fn default_price() -> Decimal {
    Decimal::new(500, 0)
}

/// Normalizes one raw item into a [`CatalogItem`], substituting fixed
/// defaults for anything missing or unusable. Infallible: there is no raw
/// shape this refuses.
#[must_use]
pub fn normalize_item(raw: RawItem) -> CatalogItem {
    let id = match raw.id {
        Some(IdValue::Number(n)) => n.to_string(),
        Some(IdValue::Text(s)) if !s.trim().is_empty() => s,
        // No usable id: mint a random token so cart correlation still works
        // within the session.
        _ => Uuid::new_v4().simple().to_string(),
    };

    let name = raw
        .name
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    let description = raw
        .description
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let long_description = raw.long_description.filter(|s| !s.trim().is_empty());

    let category = raw
        .category
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let image = raw
        .image
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE.to_string());

    let price = raw
        .price
        .and_then(coerce_price)
        .unwrap_or_else(default_price);

    CatalogItem {
        id,
        name,
        description,
        long_description,
        category,
        image,
        price,
        tags: raw.tags,
    }
}

/// Coerces the API's number-or-string price into a `Decimal`, rejecting
/// negative and non-finite values. `None` means "use the default".
fn coerce_price(price: PriceValue) -> Option<Decimal> {
    match price {
        PriceValue::Number(n) if n.is_finite() && n >= 0.0 => Decimal::from_f64(n),
        PriceValue::Number(_) => None,
        PriceValue::Text(s) => s
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|d| !d.is_sign_negative()),
    }
}
