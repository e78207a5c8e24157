use super::PostInterceptor;
use crate::server::{Body, Request, Response};

/// Post-interceptor that serializes structured response bodies to JSON text.
///
/// Handlers may return [`Body::Data`] and leave encoding to this
/// interceptor; text bodies pass through untouched. Register it at group or
/// app scope depending on how widely structured bodies are used.
pub struct JsonifyInterceptor;

impl<C> PostInterceptor<C> for JsonifyInterceptor {
    fn intercept(&self, _ctx: &C, _req: &Request, res: Response) -> Response {
        match res.body() {
            Body::Data(value) => Response::new(
                res.status(),
                "application/json; charset=utf-8",
                Body::Text(value.to_string()),
            ),
            Body::Text(_) => res,
        }
    }
}
