use serde_json::Value;

/// Response body: either text ready to write, or structured data a
/// post-interceptor or the host may still serialize (the original demo's
/// group post-interceptor JSON-encoded dict bodies this way).
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Data(Value),
}

impl Body {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(s) => Some(s),
            Body::Data(_) => None,
        }
    }

    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Body::Text(_) => None,
            Body::Data(v) => Some(v),
        }
    }
}

/// An outbound HTTP response consumed by the host server.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    content_type: String,
    body: Body,
}

impl Response {
    pub fn new(status: u16, content_type: impl Into<String>, body: Body) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body,
        }
    }

    /// 200 with a plain-text body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, "text/plain; charset=utf-8", Body::Text(body.into()))
    }

    /// 200 with an HTML body.
    pub fn html(markup: impl Into<String>) -> Self {
        Self::new(200, "text/html; charset=utf-8", Body::Text(markup.into()))
    }

    /// 200 with a structured body, left for a post-interceptor or the host
    /// to serialize.
    pub fn data(value: Value) -> Self {
        Self::new(200, "application/json; charset=utf-8", Body::Data(value))
    }

    pub fn not_found() -> Self {
        Self::new(404, "text/plain; charset=utf-8", Body::Text("Not Found".to_string()))
    }

    pub fn server_error() -> Self {
        Self::new(
            500,
            "text/plain; charset=utf-8",
            Body::Text("Internal Server Error".to_string()),
        )
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}
