use http::Method;
use tracing::{debug, info};

use crate::context::ScopedContext;
use crate::error::Result;
use crate::interceptor::{InterceptorChain, PostInterceptor, PreInterceptor};
use crate::pattern::{compile, CompiledPattern};
use crate::server::{PathVars, Request, Response};

/// Reserved scoped-context key under which [`crate::App::register_group`]
/// stores the owning group's [`GroupInfo`].
pub const GROUP_CTX_KEY: &str = "group";

/// Introspection metadata about a group, available to its interceptors via
/// the reserved [`GROUP_CTX_KEY`] context key.
#[derive(Debug, Clone)]
pub struct GroupInfo {
    pub prefix: String,
}

/// A registered handler: invoked with the variable-augmented request once a
/// route matches, produces the response.
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// One entry of a group's route table: allowed methods (empty means all),
/// the compiled pattern, and the handler. Immutable after registration.
struct Route {
    methods: Vec<Method>,
    pattern: CompiledPattern,
    handler: Handler,
}

/// Outcome of a group dispatch attempt.
///
/// No-match is silent control flow, never an error: the request is handed
/// back (including any pre-interceptor rewrites) so the app can offer it to
/// the next group.
#[derive(Debug)]
pub enum Dispatch {
    /// A route matched; carries the augmented request (for app-scope post
    /// interceptors) and the group-finalized response.
    Matched {
        request: Request,
        response: Response,
    },
    /// Prefix or route table did not claim the request.
    NoMatch(Request),
}

/// A path-prefix namespace with its own route table, scoped context, and
/// interceptor chain.
///
/// Groups are assembled at startup and registered into a [`crate::App`];
/// registration order on both levels (groups in the app, routes in the
/// group) is match-priority order.
pub struct Group {
    prefix: String,
    routes: Vec<Route>,
    ctx: ScopedContext,
    interceptors: InterceptorChain<ScopedContext>,
}

impl Group {
    /// Create a group owning `prefix`.
    ///
    /// The prefix is normalized by stripping trailing `/` and `\`; an empty
    /// prefix claims every path (a catch-all index group).
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        let prefix = prefix.trim_end_matches(['/', '\\']).to_string();
        Self {
            prefix,
            routes: Vec::new(),
            ctx: ScopedContext::new(),
            interceptors: InterceptorChain::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The group's scoped context. Lookups fall through to the app context
    /// once the group is registered.
    pub fn ctx(&self) -> &ScopedContext {
        &self.ctx
    }

    /// Register a route under this group.
    ///
    /// `template` is matched against the prefix-stripped path; an empty
    /// `methods` slice admits every method. Routes keep registration order,
    /// and the first structurally matching route wins even if a later one
    /// would also match.
    pub fn route<H>(&mut self, template: &str, methods: &[Method], handler: H) -> Result<&mut Self>
    where
        H: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        let pattern = compile(template)?;
        info!(
            prefix = %self.prefix,
            template = %template,
            methods = ?methods,
            route_index = self.routes.len(),
            "route registered"
        );
        self.routes.push(Route {
            methods: methods.to_vec(),
            pattern,
            handler: Box::new(handler),
        });
        Ok(self)
    }

    /// Register a group-scope pre-interceptor, run on every request whose
    /// path clears the prefix check.
    pub fn pre_interceptor(
        &mut self,
        interceptor: impl PreInterceptor<ScopedContext> + 'static,
    ) -> &mut Self {
        self.interceptors.register_pre(interceptor);
        self
    }

    /// Register a group-scope post-interceptor, run on every response a
    /// route of this group produces.
    pub fn post_interceptor(
        &mut self,
        interceptor: impl PostInterceptor<ScopedContext> + 'static,
    ) -> &mut Self {
        self.interceptors.register_post(interceptor);
        self
    }

    /// Attempt to dispatch a request.
    ///
    /// The sequence is: prefix check (cheap reject, hands the request back
    /// untouched), group pre-interceptors, naive prefix removal, ordered
    /// route match with method restriction, variable cast + attach, handler,
    /// group post-interceptors. A prefix hit does not guarantee a response:
    /// an exhausted route table is still [`Dispatch::NoMatch`].
    ///
    /// Cast failures propagate as hard errors (`?`), untouched.
    pub fn dispatch(&self, req: Request) -> Result<Dispatch> {
        if !req.path().starts_with(&self.prefix) {
            return Ok(Dispatch::NoMatch(req));
        }

        let mut req = self.interceptors.run_pre(&self.ctx, req);

        // Naive substring removal, not prefix-length slicing: a reoccurring
        // prefix deeper in the path is stripped there too. Known quirk,
        // kept for compatibility.
        let remaining = req.path().replace(&self.prefix, "");

        for route in &self.routes {
            if !(route.methods.is_empty() || route.methods.contains(req.method())) {
                continue;
            }
            debug!(
                prefix = %self.prefix,
                template = %route.pattern.template(),
                remaining = %remaining,
                "route match attempt"
            );
            let vars = match route.pattern.match_path(&remaining)? {
                Some(vars) => vars,
                None => continue,
            };

            info!(
                prefix = %self.prefix,
                template = %route.pattern.template(),
                method = %req.method(),
                path = %req.path(),
                vars = vars.len(),
                "route matched"
            );

            req.set_vars(PathVars::new(vars));
            let response = (route.handler)(&req);
            let response = self.interceptors.run_post(&self.ctx, &req, response);
            return Ok(Dispatch::Matched {
                request: req,
                response,
            });
        }

        debug!(
            prefix = %self.prefix,
            path = %req.path(),
            "prefix matched but no route claimed the path"
        );
        Ok(Dispatch::NoMatch(req))
    }
}
