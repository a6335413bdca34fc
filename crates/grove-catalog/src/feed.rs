//! The composed catalog feed: fetch → normalize → filter → fallback →
//! truncate.
//!
//! **Never-fail semantics**: [`CatalogFeed::load`] always returns a
//! non-empty page. Network failures, unrecognized payload shapes, and
//! genuinely empty results are logged and routed identically into the fixed
//! fallback catalog — the page's [`CatalogSource`] flag is what makes the
//! fallback path observable to callers and tests.
//!
//! Loads are independent: there is no deduplication, cancellation, or
//! ordering between concurrent calls. A slow load finishes even after a
//! newer one was started; serializing them is the caller's concern.

use grove_core::{AppConfig, CatalogItem, Category, CategoryId};

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::fallback::fallback_catalog;
use crate::normalize::normalize_item;
use crate::resolver::{CategoryResolver, CategorySelector, KeywordMatcher, ResolverMode};

/// Where a page's items came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Live,
    Fallback,
}

/// A renderable catalog page. Non-empty by construction, at most one
/// display page of items.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub source: CatalogSource,
}

/// Composes [`CatalogClient`] and [`CategoryResolver`] into the operation
/// the view layer calls.
pub struct CatalogFeed {
    client: CatalogClient,
    resolver: CategoryResolver,
    page_size: usize,
}

impl CatalogFeed {
    #[must_use]
    pub fn new(client: CatalogClient, mode: ResolverMode, page_size: usize) -> Self {
        Self {
            client,
            resolver: CategoryResolver::new(mode),
            page_size,
        }
    }

    /// Builds a feed from application config.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig, mode: ResolverMode) -> Result<Self, CatalogError> {
        let client = CatalogClient::new(
            &config.api_base_url,
            config.http_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::new(client, mode, config.page_size))
    }

    /// Loads the page for a category selection. Infallible and never empty:
    /// any failure or empty result falls back to the demo catalog.
    pub async fn load(&self, selector: &CategorySelector) -> CatalogPage {
        match self.load_live(selector).await {
            Ok(items) if !items.is_empty() => CatalogPage {
                items: truncate(items, self.page_size),
                source: CatalogSource::Live,
            },
            Ok(_) => {
                let err = CatalogError::EmptyResult {
                    context: selector_context(selector),
                };
                tracing::warn!(error = %err, "live catalog empty, serving fallback");
                self.fallback_page(selector)
            }
            Err(err) => {
                tracing::warn!(error = %err, "live catalog fetch failed, serving fallback");
                self.fallback_page(selector)
            }
        }
    }

    /// Best-effort single item load for the detail view. A logged `None`
    /// on any failure; the view simply skips the modal.
    pub async fn load_detail(&self, item_id: &str) -> Option<CatalogItem> {
        match self.client.fetch_item(item_id).await {
            Ok(raw) => Some(normalize_item(raw)),
            Err(err) => {
                tracing::warn!(item_id, error = %err, "detail fetch failed");
                None
            }
        }
    }

    /// Loads the category list: the server's categories behind a local
    /// "All Trees" entry, or the static local table when the server is
    /// unreachable or empty.
    pub async fn load_categories(&self) -> Vec<Category> {
        let fetched = match self.client.fetch_categories().await {
            Ok(raw) if !raw.is_empty() => raw,
            Ok(_) => {
                tracing::warn!("server category list empty, using local table");
                return crate::resolver::local_categories();
            }
            Err(err) => {
                tracing::warn!(error = %err, "category fetch failed, using local table");
                return crate::resolver::local_categories();
            }
        };

        let mut categories = vec![Category {
            id: CategoryId::Slug("all-trees".to_string()),
            label: "All Trees".to_string(),
            keywords: vec![],
        }];
        for raw in fetched {
            let Some(label) = raw.category.filter(|s| !s.trim().is_empty()) else {
                continue;
            };
            let id = match raw.id {
                Some(crate::envelope::IdValue::Number(n)) => n.to_string(),
                Some(crate::envelope::IdValue::Text(s)) => s,
                None => continue,
            };
            categories.push(Category {
                id: CategoryId::Server(id),
                label,
                keywords: vec![],
            });
        }
        categories
    }

    async fn load_live(&self, selector: &CategorySelector) -> Result<Vec<CatalogItem>, CatalogError> {
        let raw = match (self.resolver.mode, selector) {
            (ResolverMode::ServerDelegated, CategorySelector::Id(id)) => {
                self.client.fetch_category(id).await?
            }
            _ => self.client.fetch_catalog().await?,
        };
        let items: Vec<CatalogItem> = raw.into_iter().map(normalize_item).collect();
        Ok(self.resolver.filter(selector, items))
    }

    /// The never-empty fallback ladder: keyword-filter the demo catalog
    /// (whatever the mode — a server id's best local approximation is its
    /// hyphens-to-spaces keyword), and if nothing matches, serve the full
    /// demo catalog.
    fn fallback_page(&self, selector: &CategorySelector) -> CatalogPage {
        let demo = fallback_catalog();
        let items = match selector {
            CategorySelector::All => demo,
            CategorySelector::Id(id) => {
                let matcher = KeywordMatcher::for_slug(id);
                let filtered: Vec<CatalogItem> =
                    demo.iter().filter(|i| matcher.matches(i)).cloned().collect();
                if filtered.is_empty() { fallback_catalog() } else { filtered }
            }
        };
        CatalogPage {
            items: truncate(items, self.page_size),
            source: CatalogSource::Fallback,
        }
    }
}

fn truncate(mut items: Vec<CatalogItem>, page_size: usize) -> Vec<CatalogItem> {
    items.truncate(page_size);
    items
}

fn selector_context(selector: &CategorySelector) -> String {
    match selector {
        CategorySelector::All => "catalog".to_string(),
        CategorySelector::Id(id) => format!("category {id}"),
    }
}
