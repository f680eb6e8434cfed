use crate::request::{ServerRequest, HTTPS, SERVER_PORT};
use crate::route::{Route, Secure};

const TLS_PORT: &str = "443";

pub(super) fn evaluate<R>(route: &Route, request: &R) -> bool
where
    R: ServerRequest + ?Sized,
{
    match route.secure() {
        Secure::Indifferent => true,
        Secure::Required => is_secure(request),
        Secure::Forbidden => !is_secure(request),
    }
}

fn is_secure<R>(request: &R) -> bool
where
    R: ServerRequest + ?Sized,
{
    let https = request
        .server_param(HTTPS)
        .map_or(false, |v| v.eq_ignore_ascii_case("on"));
    let tls_port = request
        .server_param(SERVER_PORT)
        .map_or(false, |v| v.trim() == TLS_PORT);
    https || tls_port
}
