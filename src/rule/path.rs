use crate::pattern::Pattern;
use crate::request::ServerRequest;
use crate::route::Route;

use std::sync::Arc;

pub(super) fn evaluate<R>(route: &mut Route, request: &R) -> bool
where
    R: ServerRequest + ?Sized,
{
    // routes registered in a Map are always compiled
    let pattern = match route.pattern() {
        Some(p) => Arc::clone(p),
        None => match Pattern::compile(route, "") {
            Ok(p) => Arc::new(p),
            Err(e) => {
                tracing::warn!(route = ?route.name(), error = %e, "route pattern does not compile");
                return false;
            }
        },
    };

    // captures borrow `pattern`, so they must end before it drops
    let matched = match pattern.captures(request.path()) {
        Some(captures) => {
            route.add_attributes(captures);
            true
        }
        None => false,
    };
    matched
}
