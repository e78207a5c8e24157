use std::any::Any;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::interceptor::{InterceptorChain, PostInterceptor, PreInterceptor};
use crate::router::{Dispatch, Group, GroupInfo, GROUP_CTX_KEY};
use crate::server::{Body, Request, Response};

/// Serialize a value into a JSON response.
///
/// The body is JSON text (not deferred [`Body::Data`]), the content type is
/// JSON, and the status is 200.
pub fn jsonify<T: Serialize>(value: &T) -> Result<Response> {
    let body = serde_json::to_string(value)?;
    Ok(Response::new(
        200,
        "application/json; charset=utf-8",
        Body::Text(body),
    ))
}

/// The top-level dispatcher: group registry, global context and extension
/// registry, global interceptor chain.
///
/// All registration methods take `&mut self` and serving takes `&self`, so
/// the register-then-serve lifecycle is enforced by the borrow checker for
/// a shared app: once the host holds a shared reference per worker, no
/// further registration can occur.
#[derive(Default)]
pub struct App {
    groups: Vec<Group>,
    ctx: Context,
    interceptors: InterceptorChain<Context>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// The global context shared with every registered group.
    pub fn ctx(&self) -> &Context {
        &self.ctx
    }

    /// Register a group; registration order is dispatch-priority order.
    ///
    /// Registration stores the group's [`GroupInfo`] in its scoped context
    /// under the reserved [`GROUP_CTX_KEY`] (so its interceptors can
    /// introspect their owner) and links the scoped context to this app's
    /// global context — the one-time relation that enables fallback
    /// lookups.
    pub fn register_group(&mut self, group: Group) -> &mut Self {
        group.ctx().insert(
            GROUP_CTX_KEY,
            GroupInfo {
                prefix: group.prefix().to_string(),
            },
        );
        group.ctx().link(self.ctx.clone());
        info!(
            prefix = %group.prefix(),
            group_index = self.groups.len(),
            "group registered"
        );
        self.groups.push(group);
        self
    }

    /// Register a global pre-interceptor, run before group selection on
    /// every request.
    pub fn pre_interceptor(&mut self, interceptor: impl PreInterceptor<Context> + 'static) -> &mut Self {
        self.interceptors.register_pre(interceptor);
        self
    }

    /// Register a global post-interceptor, run on every response some group
    /// produced (never on a total no-match).
    pub fn post_interceptor(
        &mut self,
        interceptor: impl PostInterceptor<Context> + 'static,
    ) -> &mut Self {
        self.interceptors.register_post(interceptor);
        self
    }

    /// Store an extension value in the global context under `name`.
    ///
    /// Later retrievable from the app context or, via fallback, from any
    /// registered group's scoped context.
    pub fn register_extension<T: Any + Send + Sync>(&mut self, name: &str, value: T) -> &mut Self {
        self.ctx.insert(name, value);
        self
    }

    /// Dispatch one request through the full pipeline.
    ///
    /// Global pre-interceptors run first; groups are then offered the
    /// request in registration order, and the first one to produce a
    /// response ends the search. Global post-interceptors observe that
    /// final response before it is returned.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if every group signals no-match;
    /// [`Error::Cast`] if a matched route's variable cast fails.
    pub fn handle(&self, req: Request) -> Result<Response> {
        let mut req = self.interceptors.run_pre(&self.ctx, req);

        for group in &self.groups {
            match group.dispatch(req)? {
                Dispatch::Matched { request, response } => {
                    let response = self.interceptors.run_post(&self.ctx, &request, response);
                    info!(
                        method = %request.method(),
                        path = %request.path(),
                        prefix = %group.prefix(),
                        status = response.status(),
                        "request dispatched"
                    );
                    return Ok(response);
                }
                Dispatch::NoMatch(handed_back) => req = handed_back,
            }
        }

        warn!(method = %req.method(), path = %req.path(), "no group matched");
        Err(Error::NotFound {
            path: req.path().to_string(),
        })
    }

    /// Host-boundary convenience: dispatch and map terminal errors to
    /// responses — not-found to 404, anything else (cast failures, JSON
    /// errors) to a generic 500.
    pub fn respond(&self, req: Request) -> Response {
        match self.handle(req) {
            Ok(response) => response,
            Err(Error::NotFound { .. }) => Response::not_found(),
            Err(err) => {
                error!(error = %err, "dispatch failed");
                Response::server_error()
            }
        }
    }
}
