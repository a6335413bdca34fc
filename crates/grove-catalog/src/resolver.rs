//! Category resolution: mapping a user-chosen category to a predicate over
//! normalized items.
//!
//! Two modes exist because the upstream storefront variants disagree:
//! server-delegated filtering (the selector becomes a path parameter and the
//! server's result is trusted) and local keyword filtering (a curated
//! slug-to-keywords table matched by case-insensitive substring). Local
//! keyword matching is the primary mode; server delegation is kept for
//! compatibility with deployments where the API's per-category endpoint is
//! authoritative.
//!
//! Matching is substring containment, not tokenized equality — deliberately
//! loose, trading false positives for resilience against noisy upstream
//! labels.

use grove_core::{CatalogItem, Category, CategoryId};

/// How category filtering is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverMode {
    /// Filter locally by keyword table. Primary mode.
    #[default]
    LocalKeyword,
    /// Pass the selector to the server's per-category endpoint and trust
    /// the result. Legacy-compatibility mode.
    ServerDelegated,
}

/// A parsed category selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    /// No filter: show the whole catalog.
    All,
    /// A specific category, by server id or local slug.
    Id(String),
}

impl CategorySelector {
    /// Parses user input: absent, `"all"`, and `"all-trees"` all mean no
    /// filter.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("all" | "all-trees") => CategorySelector::All,
            Some(id) => CategorySelector::Id(id.to_string()),
        }
    }
}

/// The curated local category table: slug, display label, keywords.
const CURATED: &[(&str, &str, &[&str])] = &[
    (
        "fruit-trees",
        "Fruit Trees",
        &[
            "fruit", "mango", "guava", "citrus", "orange", "lemon", "mulberry",
        ],
    ),
    (
        "flowering-trees",
        "Flowering Trees",
        &["flower", "blossom", "jacaranda"],
    ),
    (
        "shade-trees",
        "Shade Trees",
        &["shade", "canopy", "banyan"],
    ),
    (
        "medicinal-trees",
        "Medicinal Trees",
        &["medicinal", "herbal", "neem", "remedies"],
    ),
    (
        "evergreen-trees",
        "Evergreen Trees",
        &["evergreen", "conifer", "cedar", "pine"],
    ),
    (
        "ornamental-plants",
        "Ornamental Plants",
        &["ornamental", "decorative", "bonsai"],
    ),
];

/// Resolves selectors to keyword predicates and applies them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryResolver {
    pub mode: ResolverMode,
}

impl CategoryResolver {
    #[must_use]
    pub fn new(mode: ResolverMode) -> Self {
        Self { mode }
    }

    /// Keywords for a slug: the curated table entry, or — for unknown
    /// slugs — a single keyword derived by replacing hyphens with spaces.
    #[must_use]
    pub fn keywords_for(slug: &str) -> Vec<String> {
        CURATED
            .iter()
            .find(|(s, _, _)| *s == slug)
            .map_or_else(
                || vec![slug.replace('-', " ").to_lowercase()],
                |(_, _, keywords)| keywords.iter().map(|k| (*k).to_string()).collect(),
            )
    }

    /// Applies the selector to an item sequence. Stable: relative order of
    /// matching items is preserved.
    ///
    /// In [`ResolverMode::ServerDelegated`] the server already filtered, so
    /// the sequence passes through untouched.
    #[must_use]
    pub fn filter(&self, selector: &CategorySelector, items: Vec<CatalogItem>) -> Vec<CatalogItem> {
        match (self.mode, selector) {
            (_, CategorySelector::All) | (ResolverMode::ServerDelegated, _) => items,
            (ResolverMode::LocalKeyword, CategorySelector::Id(slug)) => {
                let matcher = KeywordMatcher::for_slug(slug);
                items.into_iter().filter(|i| matcher.matches(i)).collect()
            }
        }
    }
}

/// Case-insensitive substring matcher over an item's concatenated text
/// fields. Isolated so a stricter exact-tag matcher can replace it without
/// touching the fetcher or feed.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    #[must_use]
    pub fn for_slug(slug: &str) -> Self {
        Self {
            keywords: CategoryResolver::keywords_for(slug),
        }
    }

    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let text = item.search_text();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// The static local category list, with "All Trees" first. Used directly by
/// the view and as the fallback when the server's category list is
/// unreachable.
#[must_use]
pub fn local_categories() -> Vec<Category> {
    let mut categories = vec![Category {
        id: CategoryId::Slug("all-trees".to_string()),
        label: "All Trees".to_string(),
        keywords: vec![],
    }];
    categories.extend(CURATED.iter().map(|(slug, label, keywords)| Category {
        id: CategoryId::Slug((*slug).to_string()),
        label: (*label).to_string(),
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
    }));
    categories
}
