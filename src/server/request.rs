use std::sync::Arc;

use http::Method;
use smallvec::SmallVec;

use crate::pattern::{ParamValue, VarVec};

/// Maximum inline headers before heap allocation.
/// Most requests carry ≤16 headers.
pub const MAX_INLINE_HEADERS: usize = 16;

/// Stack-allocated header storage.
///
/// Header names use `Arc<str>` — they repeat heavily across requests
/// (Content-Type, User-Agent, ...) and clone as an O(1) refcount bump.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// An inbound HTTP request as handed over by the host server.
///
/// Built by the host (or a test) in builder style:
///
/// ```rust
/// use grouter::Request;
/// use http::Method;
///
/// let req = Request::new(Method::GET, "/python/tom/20")
///     .header("user-agent", "curl/8.0");
/// assert_eq!(req.user_agent(), Some("curl/8.0"));
/// ```
///
/// The `vars` bag is empty until a group's route matches; the dispatching
/// group fills it with the typed path variables extracted from the URL.
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderVec,
    vars: PathVars,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderVec::new(),
            vars: PathVars::default(),
        }
    }

    /// Attach a header (builder style).
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((Arc::from(name), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replace the request path. Mainly for pre-interceptors that rewrite
    /// the request before route matching.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Get a header by name (case-insensitive per RFC 7230).
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.get_header("user-agent")
    }

    /// Typed path variables extracted by the matching route.
    ///
    /// Empty before a route has matched.
    pub fn vars(&self) -> &PathVars {
        &self.vars
    }

    pub(crate) fn set_vars(&mut self, vars: PathVars) {
        self.vars = vars;
    }
}

/// Read-only bag of typed path variables, in template encounter order.
#[derive(Debug, Default)]
pub struct PathVars {
    entries: VarVec,
}

impl PathVars {
    pub(crate) fn new(entries: VarVec) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v)
    }

    /// String value of a `str`/`word`/`any` variable.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Integer value of an `int` variable.
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ParamValue::as_int)
    }

    /// Float value of a `float` variable.
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ParamValue::as_float)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }
}
