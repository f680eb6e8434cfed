#![forbid(unsafe_code)]

//! Glue for the `http` crate: requests can be matched directly and
//! match failures map to response statuses.

use crate::map::NoMatch;
use crate::request::{ServerRequest, HTTPS, SERVER_PORT};
use crate::rule::Rule;

use std::borrow::Cow;

use http::header::{HeaderMap, ACCEPT, HOST};
use http::uri::Scheme;
pub use http::{HeaderValue, Method, StatusCode};

const HEADER_PREFIX: &str = "HTTP_";

impl<B> ServerRequest for http::Request<B> {
    fn path(&self) -> &str {
        self.uri().path()
    }

    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn server_param(&self, name: &str) -> Option<Cow<'_, str>> {
        let uri = self.uri();
        match name {
            HTTPS => some_if(uri.scheme() == Some(&Scheme::HTTPS), || Cow::Borrowed("on")),
            SERVER_PORT => server_port(self).map(|p| Cow::Owned(p.to_string())),
            "REQUEST_METHOD" => Some(Cow::Borrowed(http::Request::method(self).as_str())),
            "REQUEST_URI" => uri.path_and_query().map(|pq| Cow::Borrowed(pq.as_str())),
            "QUERY_STRING" => uri.query().map(Cow::Borrowed),
            "HTTP_HOST" => joined(self.headers(), "host")
                .or_else(|| uri.authority().map(|a| Cow::Borrowed(a.as_str()))),
            _ => {
                let header = name.strip_prefix(HEADER_PREFIX)?;
                joined(self.headers(), &header.to_ascii_lowercase().replace('_', "-"))
            }
        }
    }

    fn accept(&self) -> Option<Cow<'_, str>> {
        let mut values = self.headers().get_all(ACCEPT).iter();
        let first = values.next()?.to_str().ok()?;
        let rest: Vec<&str> = values.filter_map(|v| v.to_str().ok()).collect();
        if rest.is_empty() {
            return Some(Cow::Borrowed(first));
        }
        Some(Cow::Owned(format!("{},{}", first, rest.join(","))))
    }
}

/// Explicit URI port, then the `Host` header port, then the scheme default.
fn server_port<B>(req: &http::Request<B>) -> Option<u16> {
    let uri = req.uri();
    if let Some(port) = uri.port_u16() {
        return Some(port);
    }
    let host_port = req
        .headers()
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.rsplit_once(':'))
        .and_then(|(_, port)| port.parse().ok());
    if host_port.is_some() {
        return host_port;
    }
    match uri.scheme_str() {
        Some("https") => Some(443),
        Some("http") => Some(80),
        _ => None,
    }
}

fn joined<'a>(headers: &'a HeaderMap, name: &str) -> Option<Cow<'a, str>> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    match values.as_slice() {
        [] => None,
        [one] => Some(Cow::Borrowed(*one)),
        many => Some(Cow::Owned(many.join(", "))),
    }
}

#[inline(always)]
fn some_if<T>(cond: bool, f: impl FnOnce() -> T) -> Option<T> {
    if cond {
        Some(f())
    } else {
        None
    }
}

impl NoMatch {
    /// 405 when the best candidate failed on method, 406 on accept,
    /// 404 otherwise.
    pub fn status_code(&self) -> StatusCode {
        match self.failed_rule() {
            Some(Rule::Method) => StatusCode::METHOD_NOT_ALLOWED,
            Some(Rule::Accept) => StatusCode::NOT_ACCEPTABLE,
            _ => StatusCode::NOT_FOUND,
        }
    }

    /// The `Allow` header value for a 405 response.
    pub fn allow_header(&self) -> Option<HeaderValue> {
        let methods = self.allowed_methods();
        if methods.is_empty() {
            return None;
        }
        HeaderValue::from_str(&methods.join(", ")).ok()
    }
}
