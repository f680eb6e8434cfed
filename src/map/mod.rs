mod find;
mod generate;
mod imp;

use crate::route::Route;
use crate::rule::Rule;
use crate::strmap::{Attributes, StrMap};

/// The ordered, named collection of routes.
///
/// Routes are registered first; afterwards the map is only read, so one
/// map can serve concurrent [`find`](Map::find) calls from many threads.
#[derive(Debug, Default)]
pub struct Map {
    basepath: String,
    proto: Route,
    routes: Vec<Route>,
    index: StrMap<usize>,
}

/// A successful match: a copy of the route holding the merged attributes.
#[derive(Debug, Clone)]
pub struct Matched {
    name: String,
    route: Route,
}

/// No routable candidate passed every rule.
///
/// Carries the candidate that got furthest through the rules, if any.
#[derive(Debug, Clone, thiserror::Error)]
#[error("no route matched the request")]
pub struct NoMatch {
    failed: Option<Route>,
}

impl Matched {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        self.route.attributes()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn into_attributes(self) -> Attributes {
        self.route.into_attributes()
    }
}

impl NoMatch {
    /// The rule that rejected the best candidate.
    /// `None` when there was no routable route at all.
    pub fn failed_rule(&self) -> Option<Rule> {
        self.failed.as_ref().and_then(Route::failed_rule)
    }

    /// The best candidate, with the attributes it had gathered.
    pub fn failed_route(&self) -> Option<&Route> {
        self.failed.as_ref()
    }

    /// Methods the best candidate allows, for an `Allow` header.
    pub fn allowed_methods(&self) -> &[String] {
        match self.failed {
            Some(ref route) if self.failed_rule() == Some(Rule::Method) => route.methods(),
            _ => &[],
        }
    }
}
