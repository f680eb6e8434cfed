//! Named-route matching and path generation.
//!
//! A [`Map`] holds routes in registration order. [`Map::find`] copies each
//! routable candidate and runs the fixed [`Rule::PIPELINE`] against the
//! request; [`Map::generate`] builds a path back from a route name and
//! attribute values.
//!
//! ```
//! use aura_router::{Map, SimpleRequest};
//!
//! let mut map = Map::new();
//! map.get("blog.read", "/blog/{id}", |route| {
//!     route.add_tokens(vec![("id", r"\d+")]);
//!     route.add_defaults(vec![("format", "html")]);
//! })
//! .unwrap();
//!
//! let matched = map.find(&SimpleRequest::new("GET", "/blog/42")).unwrap();
//! assert_eq!(matched.name(), "blog.read");
//! assert_eq!(matched.attributes().get("id").unwrap(), "42");
//! assert_eq!(matched.attributes().get("format").unwrap(), "html");
//!
//! let path = map.generate("blog.read", matched.attributes()).unwrap();
//! assert_eq!(path, "/blog/42");
//! ```

#![forbid(unsafe_code)]

mod error;
mod map;
mod pattern;
mod request;
mod route;
mod rule;
mod strmap;

#[cfg(feature = "http-router")]
pub mod http_router;

pub use self::error::RouterError;
pub use self::map::{Map, Matched, NoMatch};
pub use self::pattern::DEFAULT_TOKEN;
pub use self::request::{ServerRequest, SimpleRequest, HTTPS, SERVER_PORT};
pub use self::route::{Route, Secure};
pub use self::rule::Rule;
pub use self::strmap::{Attributes, StrMap};
