use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Maximum number of path variables before heap allocation.
/// Most templates carry ≤4 tokens (e.g. `/users/{id}/posts/{post_id}`).
pub const MAX_INLINE_VARS: usize = 8;

/// Stack-allocated variable storage produced by a pattern match.
///
/// Variable names use `Arc<str>` because they come from the compiled
/// pattern (known at registration time); cloning them per request is an
/// O(1) refcount bump. Values are per-request data and stay owned.
pub type VarVec = SmallVec<[(Arc<str>, ParamValue); MAX_INLINE_VARS]>;

/// Token grammar: a `{name}` or `{name:type}` token preceded by `/`.
/// Brace contents may not contain braces or a second colon.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(\{[^{}:]+:?[^{}:]*\})").expect("token grammar regex is valid"));

/// Typed sub-pattern selector for a template token.
///
/// Each tag pairs a sub-pattern (what the token matches) with a cast (how
/// the matched text becomes a typed value). The table is fixed:
///
/// | tag   | matches                          | cast           |
/// |-------|----------------------------------|----------------|
/// | str   | one or more non-`/` characters   | string         |
/// | word  | one or more word characters      | string         |
/// | int   | optional sign + digits           | `i64`          |
/// | float | sign + digits + `.` + digits     | `f64`          |
/// | any   | one or more of any character     | string         |
///
/// `float` demands a literal decimal point with digits on both sides:
/// `15` does not match a float token, `15.6` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Str,
    Word,
    Int,
    Float,
    Any,
}

impl TypeTag {
    /// Resolve a type name from a template token.
    ///
    /// Unknown and empty names degrade silently to `Word` — `{id:aaa}` and
    /// `{name:}` both behave as `word` tokens. Preserved template-grammar
    /// behavior, not an error.
    pub fn from_spec(spec: &str) -> Self {
        match spec {
            "str" => TypeTag::Str,
            "word" => TypeTag::Word,
            "int" => TypeTag::Int,
            "float" => TypeTag::Float,
            "any" => TypeTag::Any,
            _ => TypeTag::Word,
        }
    }

    /// The regex fragment substituted for a token of this type.
    pub fn subpattern(self) -> &'static str {
        match self {
            TypeTag::Str => r"[^/]+",
            TypeTag::Word => r"\w+",
            TypeTag::Int => r"[+-]?\d+",
            TypeTag::Float => r"[+-]?\d+\.\d+",
            TypeTag::Any => r".+",
        }
    }

    /// Cast matched text to a typed value.
    ///
    /// Structural match and cast can disagree — an `int` capture can still
    /// overflow `i64` — and that failure propagates as [`Error::Cast`]
    /// rather than being masked.
    pub fn cast(self, name: &str, raw: &str) -> Result<ParamValue> {
        match self {
            TypeTag::Str | TypeTag::Word | TypeTag::Any => Ok(ParamValue::Str(raw.to_string())),
            TypeTag::Int => raw
                .parse::<i64>()
                .map(ParamValue::Int)
                .map_err(|_| Error::Cast {
                    name: name.to_string(),
                    value: raw.to_string(),
                    tag: self,
                }),
            TypeTag::Float => raw
                .parse::<f64>()
                .map(ParamValue::Float)
                .map_err(|_| Error::Cast {
                    name: name.to_string(),
                    value: raw.to_string(),
                    tag: self,
                }),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Str => "str",
            TypeTag::Word => "word",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Any => "any",
        };
        f.write_str(name)
    }
}

/// A typed value extracted from a matched path segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
        }
    }
}

/// The matchable form of a path template: an anchored regex with named
/// captures plus the ordered name → [`TypeTag`] caster map.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    template: String,
    regex: Regex,
    casters: Vec<(Arc<str>, TypeTag)>,
}

impl CompiledPattern {
    /// The template this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Variable names and tags in template encounter order.
    pub fn casters(&self) -> &[(Arc<str>, TypeTag)] {
        &self.casters
    }

    /// Match a (prefix-stripped) request path against this pattern.
    ///
    /// Returns `Ok(None)` on a structural mismatch — a silent signal, the
    /// caller tries the next route. On a match every named capture is cast
    /// by its tag; a failed cast is a hard [`Error::Cast`].
    pub fn match_path(&self, path: &str) -> Result<Option<VarVec>> {
        let caps = match self.regex.captures(path) {
            Some(caps) => caps,
            None => return Ok(None),
        };
        let mut vars = VarVec::new();
        for (name, tag) in &self.casters {
            let raw = caps.name(name).map(|m| m.as_str()).unwrap_or_default();
            vars.push((Arc::clone(name), tag.cast(name, raw)?));
        }
        Ok(Some(vars))
    }
}

/// Compile a path template into a [`CompiledPattern`].
///
/// Scans left to right, replacing each `/{name}` / `/{name:type}` token
/// with `/(?P<name>subpattern)` and carrying literal text (including
/// trailing text after the last token) through verbatim. The result is
/// anchored at both ends, so a match must consume the whole remaining
/// path — `/{id:int}` does not match `/4.2` by stopping at `/4`. Templates
/// embedding their own anchors (e.g. `^/?$`) compose with this.
///
/// Duplicate token names are not validated here; the regex engine rejects
/// duplicate capture groups and that surfaces as [`Error::Pattern`].
pub fn compile(template: &str) -> Result<CompiledPattern> {
    let mut pattern = String::with_capacity(template.len() + 16);
    let mut casters: Vec<(Arc<str>, TypeTag)> = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(template) {
        let (whole, token) = match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(token)) => (whole, token.as_str()),
            _ => continue,
        };
        pattern.push_str(&template[last..whole.start()]);

        let inner = &token[1..token.len() - 1];
        let (name, spec) = inner.split_once(':').unwrap_or((inner, ""));
        let tag = TypeTag::from_spec(spec);
        pattern.push_str(&format!("/(?P<{name}>{})", tag.subpattern()));
        casters.push((Arc::from(name), tag));

        last = whole.end();
    }
    pattern.push_str(&template[last..]);

    let regex =
        Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| Error::Pattern {
            template: template.to_string(),
            source,
        })?;

    Ok(CompiledPattern {
        template: template.to_string(),
        regex,
        casters,
    })
}
