use crate::request::ServerRequest;
use crate::route::Route;

use smallvec::SmallVec;

const ANY: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq)]
struct MediaRange<'a> {
    kind: &'a str,
    subtype: &'a str,
    q: f32,
}

pub(super) fn evaluate<R>(route: &Route, request: &R) -> bool
where
    R: ServerRequest + ?Sized,
{
    if route.accept().is_empty() {
        return true;
    }
    let header = match request.accept() {
        Some(h) if !h.trim().is_empty() => h,
        _ => return true,
    };

    let ranges = parse(&header);
    route.accept().iter().any(|media| match split(media) {
        Some((kind, subtype)) => ranges.iter().any(|r| r.accepts(kind, subtype)),
        None => false,
    })
}

impl MediaRange<'_> {
    fn accepts(&self, kind: &str, subtype: &str) -> bool {
        self.q > 0.0 && fits(self.kind, kind) && fits(self.subtype, subtype)
    }
}

fn fits(lhs: &str, rhs: &str) -> bool {
    lhs == ANY || rhs == ANY || lhs.eq_ignore_ascii_case(rhs)
}

fn split(media: &str) -> Option<(&str, &str)> {
    let (kind, subtype) = media.trim().split_once('/')?;
    let (kind, subtype) = (kind.trim(), subtype.trim());
    if kind.is_empty() || subtype.is_empty() {
        return None;
    }
    Some((kind, subtype))
}

/// Parses an `Accept` header. Malformed entries are skipped; a missing or
/// unparsable `q` counts as 1.
fn parse(header: &str) -> SmallVec<[MediaRange<'_>; 8]> {
    let mut ranges = SmallVec::new();
    for entry in header.split(',') {
        let mut params = entry.split(';');
        let (kind, subtype) = match params.next().and_then(split) {
            Some(media) => media,
            None => continue,
        };
        let q = params
            .filter_map(|p| p.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        ranges.push(MediaRange { kind, subtype, q });
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header() {
        let ranges = parse("text/html;level=1, application/json;q=0.5, bogus, */*;q=0");
        assert_eq!(
            ranges.as_slice(),
            &[
                MediaRange {
                    kind: "text",
                    subtype: "html",
                    q: 1.0
                },
                MediaRange {
                    kind: "application",
                    subtype: "json",
                    q: 0.5
                },
                MediaRange {
                    kind: "*",
                    subtype: "*",
                    q: 0.0
                },
            ]
        );
    }

    #[test]
    fn zero_quality_is_refused() {
        let ranges = parse("application/json;q=0");
        assert!(!ranges[0].accepts("application", "json"));
    }

    #[test]
    fn wildcards_on_either_side() {
        let ranges = parse("text/*");
        assert!(ranges[0].accepts("text", "csv"));
        assert!(!ranges[0].accepts("image", "png"));

        let ranges = parse("image/png");
        assert!(ranges[0].accepts("*", "*"));
        assert!(ranges[0].accepts("image", "*"));
    }
}
