use crate::strmap::StrMap;

use std::borrow::Cow;

/// Server key holding the HTTPS indicator.
pub const HTTPS: &str = "HTTPS";
/// Server key holding the port the request arrived on.
pub const SERVER_PORT: &str = "SERVER_PORT";

/// The parts of an inbound request the matching rules read.
///
/// Server values follow the CGI convention (`HTTPS`, `SERVER_PORT`,
/// `HTTP_HOST`, ...).
pub trait ServerRequest {
    fn path(&self) -> &str;

    fn method(&self) -> &str;

    fn server_param(&self, name: &str) -> Option<Cow<'_, str>>;

    /// The `Accept` header, if any.
    fn accept(&self) -> Option<Cow<'_, str>>;
}

impl<R: ServerRequest + ?Sized> ServerRequest for &R {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn method(&self) -> &str {
        (**self).method()
    }

    fn server_param(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).server_param(name)
    }

    fn accept(&self) -> Option<Cow<'_, str>> {
        (**self).accept()
    }
}

/// An owned request description.
#[derive(Debug, Clone, Default)]
pub struct SimpleRequest {
    method: String,
    path: String,
    server: StrMap<String>,
    accept: Option<String>,
}

impl SimpleRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            server: StrMap::new(),
            accept: None,
        }
    }

    pub fn with_server(mut self, name: &str, value: impl Into<String>) -> Self {
        self.server.insert(name, value.into());
        self
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }
}

impl ServerRequest for SimpleRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> &str {
        &self.method
    }

    fn server_param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.server.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }

    fn accept(&self) -> Option<Cow<'_, str>> {
        self.accept.as_deref().map(Cow::Borrowed)
    }
}
