use tracing::info;

use super::{PostInterceptor, PreInterceptor};
use crate::server::{Request, Response};

/// Pre/post interceptor that emits structured request/response events.
///
/// Register at app scope to log every dispatched request, or at group scope
/// to log only one prefix's traffic.
pub struct TraceInterceptor;

impl<C> PreInterceptor<C> for TraceInterceptor {
    fn intercept(&self, _ctx: &C, req: Request) -> Request {
        info!(
            method = %req.method(),
            path = %req.path(),
            user_agent = req.user_agent().unwrap_or("-"),
            "request received"
        );
        req
    }
}

impl<C> PostInterceptor<C> for TraceInterceptor {
    fn intercept(&self, _ctx: &C, req: &Request, res: Response) -> Response {
        info!(
            method = %req.method(),
            path = %req.path(),
            status = res.status(),
            "response produced"
        );
        res
    }
}
