//! The fixed demo catalog substituted whenever live data is unavailable or
//! empty, so the view never renders a blank grid.

use grove_core::CatalogItem;
use rust_decimal::Decimal;

struct DemoItem {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    image: &'static str,
    /// Whole-currency-unit price.
    price: i64,
}

/// 9 items across 6 categories. The four fruit items (Mango Tree, Guava
/// Tree, Citrus Tree, Mulberry) are the ones the `fruit-trees` keyword set
/// matches; the other five deliberately contain none of those keywords.
const DEMO_CATALOG: [DemoItem; 9] = [
    DemoItem {
        id: "demo-mango",
        name: "Mango Tree",
        description: "A fast-growing tropical favorite that bears sweet, fragrant fruit.",
        category: "Fruit Trees",
        image: "https://i.ibb.co/d1/mango-tree.jpg",
        price: 500,
    },
    DemoItem {
        id: "demo-guava",
        name: "Guava Tree",
        description: "Hardy and compact, with vitamin-rich fruit in under two years.",
        category: "Fruit Trees",
        image: "https://i.ibb.co/d2/guava-tree.jpg",
        price: 350,
    },
    DemoItem {
        id: "demo-citrus",
        name: "Citrus Tree",
        description: "Glossy leaves and fragrant blooms before each orange and lemon harvest.",
        category: "Fruit Trees",
        image: "https://i.ibb.co/d3/citrus-tree.jpg",
        price: 450,
    },
    DemoItem {
        id: "demo-mulberry",
        name: "Mulberry",
        description: "Generous summer berries loved by birds and jam makers alike.",
        category: "Fruit Trees",
        image: "https://i.ibb.co/d4/mulberry.jpg",
        price: 300,
    },
    DemoItem {
        id: "demo-jacaranda",
        name: "Jacaranda",
        description: "Clouds of violet blossoms cover the bare branches each spring.",
        category: "Flowering Trees",
        image: "https://i.ibb.co/d5/jacaranda.jpg",
        price: 550,
    },
    DemoItem {
        id: "demo-banyan",
        name: "Banyan Tree",
        description: "A sprawling canopy and aerial roots make it a landmark for big gardens.",
        category: "Shade Trees",
        image: "https://i.ibb.co/d6/banyan-tree.jpg",
        price: 700,
    },
    DemoItem {
        id: "demo-neem",
        name: "Neem Tree",
        description: "Every part of this tough native is used in traditional herbal remedies.",
        category: "Medicinal Trees",
        image: "https://i.ibb.co/d7/neem-tree.jpg",
        price: 400,
    },
    DemoItem {
        id: "demo-cedar",
        name: "Deodar Cedar",
        description: "A stately conifer that keeps its deep green needles all year.",
        category: "Evergreen Trees",
        image: "https://i.ibb.co/d8/deodar-cedar.jpg",
        price: 600,
    },
    DemoItem {
        id: "demo-bonsai",
        name: "Bonsai Ficus",
        description: "A sculpted miniature ficus for desks and balconies.",
        category: "Ornamental Plants",
        image: "https://i.ibb.co/d9/bonsai-ficus.jpg",
        price: 250,
    },
];

/// Returns the demo catalog as normalized [`CatalogItem`]s, in fixed order.
#[must_use]
pub fn fallback_catalog() -> Vec<CatalogItem> {
    DEMO_CATALOG
        .iter()
        .map(|d| CatalogItem {
            id: d.id.to_string(),
            name: d.name.to_string(),
            description: d.description.to_string(),
            long_description: None,
            category: d.category.to_string(),
            image: d.image.to_string(),
            price: Decimal::new(d.price, 0),
            tags: vec![],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn has_exactly_nine_items() {
        assert_eq!(fallback_catalog().len(), 9);
    }

    #[test]
    fn spans_six_categories() {
        let categories: BTreeSet<_> = fallback_catalog()
            .into_iter()
            .map(|i| i.category)
            .collect();
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn ids_are_unique() {
        let ids: BTreeSet<_> = fallback_catalog().into_iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn items_satisfy_normalization_invariants() {
        for item in fallback_catalog() {
            assert!(!item.id.is_empty());
            assert!(!item.name.is_empty());
            assert!(!item.description.is_empty());
            assert!(!item.category.is_empty());
            assert!(!item.image.is_empty());
            assert!(!item.price.is_sign_negative());
        }
    }

    #[test]
    fn exactly_four_items_match_fruit_keywords() {
        let keywords = [
            "fruit", "mango", "guava", "citrus", "orange", "lemon", "mulberry",
        ];
        let matches: Vec<_> = fallback_catalog()
            .into_iter()
            .filter(|item| {
                let text = item.search_text();
                keywords.iter().any(|k| text.contains(k))
            })
            .map(|i| i.name)
            .collect();
        assert_eq!(
            matches,
            vec!["Mango Tree", "Guava Tree", "Citrus Tree", "Mulberry"]
        );
    }
}
