use crate::server::{Request, Response};

/// Observes or transforms a request before route matching and handling.
///
/// `C` is the scope's context type: [`crate::ScopedContext`] at group scope,
/// [`crate::Context`] at app scope.
pub trait PreInterceptor<C>: Send + Sync {
    fn intercept(&self, ctx: &C, req: Request) -> Request;
}

impl<C, F> PreInterceptor<C> for F
where
    F: Fn(&C, Request) -> Request + Send + Sync,
{
    fn intercept(&self, ctx: &C, req: Request) -> Request {
        self(ctx, req)
    }
}

/// Observes or transforms a response after the handler has produced one.
///
/// The request is passed along read-only in case the transform needs it
/// (content negotiation, logging, ...).
pub trait PostInterceptor<C>: Send + Sync {
    fn intercept(&self, ctx: &C, req: &Request, res: Response) -> Response;
}

impl<C, F> PostInterceptor<C> for F
where
    F: Fn(&C, &Request, Response) -> Response + Send + Sync,
{
    fn intercept(&self, ctx: &C, req: &Request, res: Response) -> Response {
        self(ctx, req, res)
    }
}

/// An ordered pre list and post list threaded through one dispatch scope.
pub struct InterceptorChain<C> {
    pre: Vec<Box<dyn PreInterceptor<C>>>,
    post: Vec<Box<dyn PostInterceptor<C>>>,
}

impl<C> Default for InterceptorChain<C> {
    fn default() -> Self {
        Self {
            pre: Vec::new(),
            post: Vec::new(),
        }
    }
}

impl<C> InterceptorChain<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-interceptor; registration order is execution order.
    pub fn register_pre(&mut self, interceptor: impl PreInterceptor<C> + 'static) {
        self.pre.push(Box::new(interceptor));
    }

    /// Append a post-interceptor; registration order is execution order.
    pub fn register_post(&mut self, interceptor: impl PostInterceptor<C> + 'static) {
        self.post.push(Box::new(interceptor));
    }

    /// Thread the request through every pre-interceptor in order.
    pub fn run_pre(&self, ctx: &C, mut req: Request) -> Request {
        for interceptor in &self.pre {
            req = interceptor.intercept(ctx, req);
        }
        req
    }

    /// Thread the response through every post-interceptor in order.
    pub fn run_post(&self, ctx: &C, req: &Request, mut res: Response) -> Response {
        for interceptor in &self.post {
            res = interceptor.intercept(ctx, req, res);
        }
        res
    }
}
