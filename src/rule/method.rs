use crate::request::ServerRequest;
use crate::route::Route;

pub(super) fn evaluate<R>(route: &Route, request: &R) -> bool
where
    R: ServerRequest + ?Sized,
{
    let methods = route.methods();
    methods.is_empty() || methods.iter().any(|m| m == request.method())
}
