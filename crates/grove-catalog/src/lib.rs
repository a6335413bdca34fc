pub mod client;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod feed;
pub mod normalize;
pub mod resolver;

pub use client::CatalogClient;
pub use envelope::{ListEnvelope, RawCategory, RawItem};
pub use error::CatalogError;
pub use fallback::fallback_catalog;
pub use feed::{CatalogFeed, CatalogPage, CatalogSource};
pub use normalize::normalize_item;
pub use resolver::{local_categories, CategoryResolver, CategorySelector, KeywordMatcher, ResolverMode};
