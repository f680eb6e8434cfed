const OPEN: char = '{';
const CLOSE: char = '}';
const SLASH: char = '/';
const COMMA: char = ',';

/// A piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(Box<str>),
    /// `{name}`
    Token(Box<str>),
    /// `{/a,b,c}`: each name is an optional `/value` segment.
    /// `leading` is set when the group starts the template.
    Optional { names: Vec<Box<str>>, leading: bool },
}

pub(crate) fn parse(path: &str) -> Result<Vec<Segment>, &'static str> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut rest = path;

    while !rest.is_empty() {
        let start = match rest.find(OPEN) {
            Some(i) => i,
            None => {
                check_literal(rest)?;
                segments.push(Segment::Literal(rest.into()));
                break;
            }
        };

        if let Some(Segment::Optional { .. }) = segments.last() {
            return Err("optional segments must end the path");
        }

        let literal = &rest[..start];
        if !literal.is_empty() {
            check_literal(literal)?;
            segments.push(Segment::Literal(literal.into()));
        }

        let end = match rest[start..].find(CLOSE) {
            Some(i) => start + i,
            None => return Err("unclosed '{' in path"),
        };
        let inner = &rest[start + 1..end];

        if inner.starts_with(SLASH) {
            let mut names = Vec::new();
            for name in inner[1..].split(COMMA) {
                check_name(name)?;
                names.push(name.into());
            }
            let leading = segments.is_empty();
            segments.push(Segment::Optional { names, leading });
        } else {
            check_name(inner)?;
            segments.push(Segment::Token(inner.into()));
        }

        rest = &rest[end + 1..];
    }

    if let [.., Segment::Optional { .. }, Segment::Literal(_)] = segments.as_slice() {
        return Err("optional segments must end the path");
    }

    Ok(segments)
}

/// Attribute names become regex group names, so they share the same rules.
pub(crate) fn check_name(name: &str) -> Result<(), &'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err("attribute name can not be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Err("attribute name must start with a letter or '_'"),
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err("attribute name may only contain letters, digits and '_'")
    }
}

fn check_literal(literal: &str) -> Result<(), &'static str> {
    if literal.contains(CLOSE) {
        return Err("unmatched '}' in path");
    }
    Ok(())
}
