use super::{Route, Secure};

use crate::error::RouterError;
use crate::pattern::Pattern;
use crate::rule::Rule;

use std::sync::Arc;

impl Route {
    /// Appends to the path prefix. Fails once the path is set.
    pub fn append_path_prefix(&mut self, prefix: &str) -> Result<&mut Self, RouterError> {
        if self.path.is_some() {
            return Err(RouterError::immutable("path_prefix"));
        }
        self.path_prefix.push_str(prefix);
        Ok(self)
    }

    /// Appends to the name prefix. Fails once the name is set.
    pub fn append_name_prefix(&mut self, prefix: &str) -> Result<&mut Self, RouterError> {
        if self.name.is_some() {
            return Err(RouterError::immutable("name_prefix"));
        }
        self.name_prefix.push_str(prefix);
        Ok(self)
    }

    /// Sets the path template, prefixed by the path prefix.
    pub fn set_path(&mut self, path: &str) -> Result<&mut Self, RouterError> {
        if self.path.is_some() {
            return Err(RouterError::immutable("path"));
        }
        self.path = Some(format!("{}{}", self.path_prefix, path));
        self.pattern = None;
        Ok(self)
    }

    /// Sets the name, prefixed by the name prefix.
    pub fn set_name(&mut self, name: &str) -> Result<&mut Self, RouterError> {
        if self.name.is_some() {
            return Err(RouterError::immutable("name"));
        }
        self.name = Some(format!("{}{}", self.name_prefix, name));
        Ok(self)
    }

    pub fn set_tokens<I, K, V>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.tokens.clear();
        self.add_tokens(tokens)
    }

    pub fn add_tokens<I, K, V>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.tokens.merge(tokens);
        self.pattern = None;
        self
    }

    pub fn set_server<I, K, V>(&mut self, server: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.server.clear();
        self.add_server(server)
    }

    pub fn add_server<I, K, V>(&mut self, server: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.server.merge(server);
        self.pattern = None;
        self
    }

    pub fn set_methods<I, M>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.methods.clear();
        self.add_methods(methods)
    }

    pub fn add_methods<I, M>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        for method in methods {
            let method = method.into();
            if !self.methods.contains(&method) {
                self.methods.push(method);
            }
        }
        self
    }

    pub fn set_accept<I, A>(&mut self, accept: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.accept.clear();
        self.add_accept(accept)
    }

    pub fn add_accept<I, A>(&mut self, accept: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        for media in accept {
            let media = media.into();
            if !self.accept.contains(&media) {
                self.accept.push(media);
            }
        }
        self
    }

    pub fn set_defaults<I, K, V>(&mut self, defaults: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.defaults.clear();
        self.add_defaults(defaults)
    }

    pub fn add_defaults<I, K, V>(&mut self, defaults: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.defaults.merge(defaults);
        self
    }

    /// `true` requires HTTPS, `false` forbids it, `None` accepts both.
    pub fn set_secure(&mut self, secure: impl Into<Secure>) -> &mut Self {
        self.secure = secure.into();
        self
    }

    pub fn set_wildcard(&mut self, wildcard: impl Into<String>) -> &mut Self {
        self.wildcard = Some(wildcard.into());
        self.pattern = None;
        self
    }

    pub fn clear_wildcard(&mut self) -> &mut Self {
        self.wildcard = None;
        self.pattern = None;
        self
    }

    /// A non-routable route is only used to generate paths.
    pub fn set_routable(&mut self, routable: bool) -> &mut Self {
        self.routable = routable;
        self
    }

    pub fn add_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.attributes.merge(attributes);
        self
    }

    pub fn set_failed_rule(&mut self, rule: Rule) -> &mut Self {
        self.failed_rule = Some(rule);
        self
    }

    /// Compiles the path and server patterns so candidates share them.
    pub fn compile(&mut self) -> Result<&mut Self, RouterError> {
        self.compile_with_basepath("")?;
        Ok(self)
    }

    pub(crate) fn compile_with_basepath(&mut self, basepath: &str) -> Result<(), RouterError> {
        let pattern = Pattern::compile(self, basepath)?;
        self.pattern = Some(Arc::new(pattern));
        Ok(())
    }
}
