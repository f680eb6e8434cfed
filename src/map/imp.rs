use super::Map;

use crate::error::RouterError;
use crate::route::Route;
use crate::strmap::StrMap;

use std::iter;

impl Map {
    pub fn new() -> Self {
        Self::with_basepath("")
    }

    /// Request paths must start with `basepath`; generated paths get it prepended.
    pub fn with_basepath(basepath: impl Into<String>) -> Self {
        Self {
            basepath: basepath.into(),
            proto: Route::new(),
            routes: Vec::new(),
            index: StrMap::new(),
        }
    }

    pub fn basepath(&self) -> &str {
        &self.basepath
    }

    /// The template every route created by [`route`](Map::route) starts from.
    pub fn proto(&self) -> &Route {
        &self.proto
    }

    pub fn proto_mut(&mut self) -> &mut Route {
        &mut self.proto
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter()
    }

    pub fn get_route(&self, name: &str) -> Result<&Route, RouterError> {
        self.index
            .get(name)
            .and_then(|&i| self.routes.get(i))
            .ok_or_else(|| RouterError::RouteNotFound(name.to_owned()))
    }

    /// Registers a fully configured route and compiles its patterns.
    pub fn add_route(&mut self, mut route: Route) -> Result<&mut Self, RouterError> {
        let name = match route.name() {
            Some(name) => name.to_owned(),
            None => return Err(RouterError::Incomplete("name")),
        };
        if route.path().is_none() {
            return Err(RouterError::Incomplete("path"));
        }
        if self.index.contains_key(&name) {
            return Err(RouterError::RouteAlreadyExists(name));
        }

        route.compile_with_basepath(&self.basepath)?;
        if let Some(pattern) = route.pattern() {
            tracing::trace!(route = %name, pattern = pattern.as_str(), "route registered");
        }

        self.index.insert(name, self.routes.len());
        self.routes.push(route);
        Ok(self)
    }

    /// Creates a route from the proto route, lets `f` configure it, then
    /// registers it.
    pub fn route(
        &mut self,
        name: &str,
        path: &str,
        f: impl FnOnce(&mut Route),
    ) -> Result<&mut Self, RouterError> {
        let mut route = self.proto.clone();
        route.set_name(name)?.set_path(path)?;
        f(&mut route);
        self.add_route(route)
    }

    /// Routes created inside `f` get `name_prefix` and `path_prefix`.
    pub fn attach(
        &mut self,
        name_prefix: &str,
        path_prefix: &str,
        f: impl FnOnce(&mut Map) -> Result<(), RouterError>,
    ) -> Result<&mut Self, RouterError> {
        let saved = self.proto.clone();
        let ret = self.with_prefixes(name_prefix, path_prefix, f);
        self.proto = saved;
        ret?;
        Ok(self)
    }

    fn with_prefixes(
        &mut self,
        name_prefix: &str,
        path_prefix: &str,
        f: impl FnOnce(&mut Map) -> Result<(), RouterError>,
    ) -> Result<(), RouterError> {
        self.proto
            .append_name_prefix(name_prefix)?
            .append_path_prefix(path_prefix)?;
        f(self)
    }
}

macro_rules! define_method {
    ($name:ident, $method:literal) => {
        pub fn $name(
            &mut self,
            name: &str,
            path: &str,
            f: impl FnOnce(&mut Route),
        ) -> Result<&mut Self, RouterError> {
            self.route(name, path, |route| {
                route.set_methods(iter::once($method));
                f(route);
            })
        }
    };
}

impl Map {
    define_method!(get, "GET");
    define_method!(post, "POST");
    define_method!(put, "PUT");
    define_method!(patch, "PATCH");
    define_method!(delete, "DELETE");
    define_method!(head, "HEAD");
    define_method!(options, "OPTIONS");
}
