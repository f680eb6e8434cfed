mod imp;

use crate::pattern::Pattern;
use crate::rule::Rule;
use crate::strmap::{Attributes, StrMap};

use std::sync::Arc;

use smallvec::SmallVec;

/// One named, path-templated route and its matching constraints.
///
/// `name` and `path` can be assigned once. Prefixes can only be appended
/// before the corresponding field is assigned.
///
/// Matching never touches a route directly: each attempt works on a
/// [`candidate`](Route::candidate) copy.
#[derive(Debug, Clone)]
pub struct Route {
    name: Option<String>,
    path: Option<String>,
    name_prefix: String,
    path_prefix: String,
    tokens: StrMap<String>,
    server: StrMap<String>,
    methods: SmallVec<[String; 2]>,
    accept: SmallVec<[String; 2]>,
    defaults: Attributes,
    secure: Secure,
    wildcard: Option<String>,
    routable: bool,
    attributes: Attributes,
    failed_rule: Option<Rule>,
    pattern: Option<Arc<Pattern>>,
}

/// Transport security constraint of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Secure {
    /// The request must be secure (HTTPS active or port 443).
    Required,
    /// The request must not be secure.
    Forbidden,
    Indifferent,
}

impl Default for Secure {
    fn default() -> Self {
        Secure::Indifferent
    }
}

impl From<bool> for Secure {
    fn from(secure: bool) -> Self {
        if secure {
            Secure::Required
        } else {
            Secure::Forbidden
        }
    }
}

impl From<Option<bool>> for Secure {
    fn from(secure: Option<bool>) -> Self {
        secure.map_or(Secure::Indifferent, Secure::from)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

impl Route {
    pub fn new() -> Self {
        Self {
            name: None,
            path: None,
            name_prefix: String::new(),
            path_prefix: String::new(),
            tokens: StrMap::new(),
            server: StrMap::new(),
            methods: SmallVec::new(),
            accept: SmallVec::new(),
            defaults: Attributes::new(),
            secure: Secure::Indifferent,
            wildcard: None,
            routable: true,
            attributes: Attributes::new(),
            failed_rule: None,
            pattern: None,
        }
    }

    /// Copies the route for one match attempt. The copy keeps every
    /// constraint, its attributes start from the defaults and its failed
    /// rule is cleared.
    pub fn candidate(&self) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            name_prefix: self.name_prefix.clone(),
            path_prefix: self.path_prefix.clone(),
            tokens: self.tokens.clone(),
            server: self.server.clone(),
            methods: self.methods.clone(),
            accept: self.accept.clone(),
            defaults: self.defaults.clone(),
            secure: self.secure,
            wildcard: self.wildcard.clone(),
            routable: self.routable,
            attributes: self.defaults.clone(),
            failed_rule: None,
            pattern: self.pattern.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Regular expression fragments constraining path attributes.
    pub fn tokens(&self) -> &StrMap<String> {
        &self.tokens
    }

    /// Regular expressions the request's server values must match.
    pub fn server(&self) -> &StrMap<String> {
        &self.server
    }

    /// Allowed methods; empty means any method.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Acceptable media types; empty means any.
    pub fn accept(&self) -> &[String] {
        &self.accept
    }

    pub fn defaults(&self) -> &Attributes {
        &self.defaults
    }

    pub fn secure(&self) -> Secure {
        self.secure
    }

    pub fn wildcard(&self) -> Option<&str> {
        self.wildcard.as_deref()
    }

    pub fn is_routable(&self) -> bool {
        self.routable
    }

    /// Attributes recorded by the current match attempt.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The rule that last rejected this candidate.
    pub fn failed_rule(&self) -> Option<Rule> {
        self.failed_rule
    }

    pub(crate) fn pattern(&self) -> Option<&Arc<Pattern>> {
        self.pattern.as_ref()
    }

    pub(crate) fn into_attributes(self) -> Attributes {
        self.attributes
    }
}
