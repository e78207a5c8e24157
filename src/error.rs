use crate::pattern::TypeTag;
use thiserror::Error;

/// Central error type for the dispatch core.
///
/// Route and group mismatches are deliberately *not* represented here: they
/// are silent control-flow signals (`Dispatch::NoMatch`) so the `App` can try
/// the next candidate. Only terminal conditions become errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No registered group produced a response for the request path.
    ///
    /// The host server boundary maps this to an HTTP 404.
    #[error("no registered group matched path {path:?}")]
    NotFound { path: String },

    /// A path template failed to compile into a matchable pattern.
    ///
    /// Raised at registration time, e.g. for duplicate token names (the
    /// regex engine rejects duplicate capture groups) or malformed raw
    /// regex embedded in the template.
    #[error("invalid path template {template:?}")]
    Pattern {
        template: String,
        #[source]
        source: regex::Error,
    },

    /// A captured path segment failed its type cast.
    ///
    /// This is a template-design error (e.g. an `int` token capturing text
    /// that overflows `i64`) and propagates to the host server boundary
    /// unrecovered, where it is turned into a generic server error.
    #[error("cannot cast path variable {name:?} value {value:?} as {tag}")]
    Cast {
        name: String,
        value: String,
        tag: TypeTag,
    },

    /// A value could not be serialized to a JSON response body.
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
