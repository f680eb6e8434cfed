/// Errors raised while registering routes or generating paths.
///
/// Matching never produces a `RouterError`; see [`NoMatch`](crate::NoMatch).
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("Route::{property} is immutable once set")]
    ImmutableProperty { property: &'static str },

    #[error("route has no {0}")]
    Incomplete(&'static str),

    #[error("route {0:?} already exists")]
    RouteAlreadyExists(String),

    #[error("malformed path {path:?}: {reason}")]
    MalformedPath { path: String, reason: &'static str },

    #[error("invalid pattern for path {path:?}: {source}")]
    InvalidPattern {
        path: String,
        #[source]
        source: regex::Error,
    },

    #[error("no route named {0:?}")]
    RouteNotFound(String),

    #[error("route {route:?} requires attribute {attribute:?}")]
    MissingAttribute { route: String, attribute: String },

    #[error("value {value:?} of attribute {attribute:?} does not fit route {route:?}")]
    InvalidAttribute {
        route: String,
        attribute: String,
        value: String,
    },
}

impl RouterError {
    pub(crate) fn immutable(property: &'static str) -> Self {
        Self::ImmutableProperty { property }
    }
}
