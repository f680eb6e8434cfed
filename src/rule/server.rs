use crate::request::ServerRequest;
use crate::route::Route;

use regex::Regex;
use smallvec::SmallVec;

type Matched = SmallVec<[(Box<str>, String); 4]>;

pub(super) fn evaluate<R>(route: &mut Route, request: &R) -> bool
where
    R: ServerRequest + ?Sized,
{
    if route.server().is_empty() {
        return true;
    }

    let mut matched = Matched::new();
    let ok = match route.pattern() {
        Some(pattern) => pattern
            .server()
            .iter()
            .all(|(key, re)| check(request, key, re, &mut matched)),
        None => route.server().iter().all(|(key, src)| match Regex::new(src) {
            Ok(re) => check(request, key, &re, &mut matched),
            Err(e) => {
                tracing::warn!(route = ?route.name(), key, error = %e, "invalid server regex");
                false
            }
        }),
    };

    if ok {
        route.add_attributes(matched);
    }
    ok
}

/// A missing server value is matched as an empty string.
fn check<R>(request: &R, key: &str, re: &Regex, matched: &mut Matched) -> bool
where
    R: ServerRequest + ?Sized,
{
    let value = request.server_param(key).unwrap_or_default();
    match re.find(&value) {
        Some(m) => {
            matched.push((key.into(), m.as_str().to_owned()));
            true
        }
        None => false,
    }
}
