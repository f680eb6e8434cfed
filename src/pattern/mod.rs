mod template;

use self::template::Segment;

use crate::error::RouterError;
use crate::route::Route;
use crate::strmap::{Attributes, StrMap};

use std::borrow::Cow;
use std::fmt::Write as _;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use smallvec::SmallVec;

/// Regex for a token without a declared constraint.
pub const DEFAULT_TOKEN: &str = "[^/]+";

/// Bytes not allowed verbatim in a path segment. Unreserved characters,
/// sub-delims, `:` and `@` stay as they are.
const SEGMENT: &AsciiSet = &WILDCARD.add(b'/');

/// [`SEGMENT`] minus `/`, for wildcard values that span segments.
const WILDCARD: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub(crate) type Captures<'a> = SmallVec<[(&'a str, String); 8]>;

/// The compiled form of a route: path regex, per-token checks for
/// generation, and server regexes.
#[derive(Debug)]
pub(crate) struct Pattern {
    regex: Regex,
    segments: Vec<Segment>,
    checks: StrMap<Regex>,
    server: Vec<(Box<str>, Regex)>,
    wildcard: Option<Box<str>>,
}

impl Pattern {
    pub(crate) fn compile(route: &Route, basepath: &str) -> Result<Self, RouterError> {
        let path = route.path().ok_or(RouterError::Incomplete("path"))?;
        let malformed = |reason| RouterError::MalformedPath {
            path: path.to_owned(),
            reason,
        };
        let invalid = |source| RouterError::InvalidPattern {
            path: path.to_owned(),
            source,
        };

        let segments = template::parse(path).map_err(malformed)?;
        let wildcard = match route.wildcard() {
            Some(w) => {
                template::check_name(w).map_err(malformed)?;
                Some(Box::<str>::from(w))
            }
            None => None,
        };

        let source = build_regex(basepath, &segments, route.tokens(), wildcard.as_deref());
        let regex = Regex::new(&source).map_err(invalid)?;

        let mut checks = StrMap::new();
        for name in segments.iter().flat_map(names_of) {
            let check = format!("^(?:{})$", token_regex(route.tokens(), name));
            checks.insert(name, Regex::new(&check).map_err(invalid)?);
        }

        let mut server = Vec::with_capacity(route.server().len());
        for (key, re) in route.server() {
            server.push((key.into(), Regex::new(re).map_err(invalid)?));
        }

        Ok(Self {
            regex,
            segments,
            checks,
            server,
            wildcard,
        })
    }

    pub(crate) fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn server(&self) -> &[(Box<str>, Regex)] {
        &self.server
    }

    /// Matches `path` and returns the non-empty named captures.
    ///
    /// Token values are percent-decoded; a token that does not decode to
    /// UTF-8 fails the match. The wildcard keeps its raw path text so an
    /// encoded `/` stays distinguishable from a separator.
    pub(crate) fn captures<'a>(&'a self, path: &str) -> Option<Captures<'a>> {
        let caps = self.regex.captures(path)?;
        let mut buf = Captures::new();
        for name in self.regex.capture_names().flatten() {
            let value = match caps.name(name) {
                Some(m) if !m.as_str().is_empty() => m.as_str(),
                _ => continue,
            };
            if self.wildcard.as_deref() == Some(name) {
                buf.push((name, value.to_owned()));
            } else {
                buf.push((name, decode(value)?));
            }
        }
        Some(buf)
    }

    /// Substitutes `data` into the template.
    pub(crate) fn generate(
        &self,
        route: &str,
        data: &Attributes,
        raw: bool,
    ) -> Result<String, RouterError> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Token(name) => {
                    let value = data.get(name).ok_or_else(|| RouterError::MissingAttribute {
                        route: route.to_owned(),
                        attribute: name.to_string(),
                    })?;
                    self.check(route, name, value)?;
                    out.push_str(&encode(value, raw));
                }
                Segment::Optional { names, leading } => {
                    if *leading {
                        out.push('/');
                    }
                    let present = names
                        .iter()
                        .map_while(|name| data.get(name).map(|value| (name, value)));
                    for (i, (name, value)) in present.enumerate() {
                        self.check(route, name, value)?;
                        if i > 0 || !*leading {
                            out.push('/');
                        }
                        out.push_str(&encode(value, raw));
                    }
                }
            }
        }

        if let Some(value) = self.wildcard.as_deref().and_then(|w| data.get(w)) {
            if !value.is_empty() {
                let trimmed = out.trim_end_matches('/').len();
                out.truncate(trimmed);
                out.push('/');
                if raw {
                    out.push_str(value);
                } else {
                    encode_path_text(&mut out, value);
                }
            }
        }

        Ok(out)
    }

    fn check(&self, route: &str, name: &str, value: &str) -> Result<(), RouterError> {
        match self.checks.get(name) {
            Some(re) if !re.is_match(value) => Err(RouterError::InvalidAttribute {
                route: route.to_owned(),
                attribute: name.to_owned(),
                value: value.to_owned(),
            }),
            _ => Ok(()),
        }
    }
}

fn build_regex(
    basepath: &str,
    segments: &[Segment],
    tokens: &StrMap<String>,
    wildcard: Option<&str>,
) -> String {
    let mut re = String::from("^");
    re.push_str(&regex::escape(basepath));

    let last = segments.len().saturating_sub(1);
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(s) => {
                let s: &str = s;
                let s = if wildcard.is_some() && i == last {
                    s.trim_end_matches('/')
                } else {
                    s
                };
                re.push_str(&regex::escape(s));
            }
            Segment::Token(name) => push_group(&mut re, name, tokens),
            Segment::Optional { names, leading } => {
                if *leading {
                    re.push('/');
                }
                for (j, name) in names.iter().enumerate() {
                    re.push_str(if j == 0 && *leading { "(?:" } else { "(?:/" });
                    push_group(&mut re, name, tokens);
                }
                for _ in names {
                    re.push_str(")?");
                }
            }
        }
    }

    if let Some(name) = wildcard {
        let _ = write!(re, "(?:/(?P<{}>.*))?", name);
    }

    re.push('$');
    re
}

fn push_group(re: &mut String, name: &str, tokens: &StrMap<String>) {
    let _ = write!(re, "(?P<{}>{})", name, token_regex(tokens, name));
}

fn token_regex<'a>(tokens: &'a StrMap<String>, name: &str) -> &'a str {
    tokens.get(name).map_or(DEFAULT_TOKEN, String::as_str)
}

fn names_of(segment: &Segment) -> SmallVec<[&str; 4]> {
    match segment {
        Segment::Literal(_) => SmallVec::new(),
        Segment::Token(name) => SmallVec::from_elem(&**name, 1),
        Segment::Optional { names, .. } => names.iter().map(|n| &**n).collect(),
    }
}

fn decode(value: &str) -> Option<String> {
    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => {
            tracing::debug!(value, "captured value is not UTF-8");
            None
        }
    }
}

/// Encodes a wildcard value, keeping `/` and existing `%XX` escapes.
fn encode_path_text(out: &mut String, value: &str) {
    let mut rest = value;
    while let Some(i) = rest.find('%') {
        out.extend(utf8_percent_encode(&rest[..i], WILDCARD));
        let tail = rest[i..].as_bytes();
        if tail.len() >= 3 && tail[1].is_ascii_hexdigit() && tail[2].is_ascii_hexdigit() {
            out.push_str(&rest[i..i + 3]);
            rest = &rest[i + 3..];
        } else {
            out.push_str("%25");
            rest = &rest[i + 1..];
        }
    }
    out.extend(utf8_percent_encode(rest, WILDCARD));
}

fn encode(value: &str, raw: bool) -> Cow<'_, str> {
    if raw {
        Cow::Borrowed(value)
    } else {
        utf8_percent_encode(value, SEGMENT).into()
    }
}
