use thiserror::Error;

/// Failure classes for catalog retrieval and parsing.
///
/// The feed layer routes every variant to the fallback catalog, so none of
/// these reach the view as a visible error. They stay distinct for
/// diagnostics: the `warn` log on a fallback activation carries the variant.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("response body for {context} is not valid JSON: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON from {context} matches no known envelope shape")]
    ShapeMismatch { context: String },

    #[error("empty result for {context}")]
    EmptyResult { context: String },
}
