//! The matching rules, applied to a candidate route in a fixed order.

mod accept;
mod method;
mod path;
mod secure;
mod server;

use crate::request::ServerRequest;
use crate::route::Route;

use std::fmt;

/// One predicate of the matching pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The request path fits the compiled path template.
    Path,
    /// Every declared server value matches its regex.
    Server,
    /// The request method is allowed.
    Method,
    /// The transport security fits the route's [`Secure`](crate::Secure) setting.
    Secure,
    /// The request accepts one of the route's media types.
    Accept,
}

impl Rule {
    /// Evaluation order. Never reordered.
    pub const PIPELINE: [Rule; 5] = [
        Rule::Path,
        Rule::Server,
        Rule::Method,
        Rule::Secure,
        Rule::Accept,
    ];

    /// Evaluates the rule against a candidate.
    ///
    /// On failure the rule is recorded as the candidate's failed rule.
    /// The Path and Server rules record captured values as attributes.
    pub fn evaluate<R>(self, route: &mut Route, request: &R) -> bool
    where
        R: ServerRequest + ?Sized,
    {
        let matched = match self {
            Rule::Path => path::evaluate(route, request),
            Rule::Server => server::evaluate(route, request),
            Rule::Method => method::evaluate(route, request),
            Rule::Secure => secure::evaluate(route, request),
            Rule::Accept => accept::evaluate(route, request),
        };
        if !matched {
            route.set_failed_rule(self);
        }
        matched
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Path => "path",
            Rule::Server => "server",
            Rule::Method => "method",
            Rule::Secure => "secure",
            Rule::Accept => "accept",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
