//! # Grouter
//!
//! **Grouter** is a minimal, group-scoped HTTP request-dispatch core. It
//! maps an inbound request's path (and optionally method) to a registered
//! handler, extracting typed path variables along the way, and threads
//! pre/post interceptor chains around the handler at two scopes: per
//! route group and globally.
//!
//! ## Architecture
//!
//! The library is organized into a handful of modules, leaves first:
//!
//! - **[`pattern`]** - compiles `{name:type}` path templates into anchored
//!   regex patterns with typed named captures
//! - **[`router`]** - [`Group`]: one path-prefix namespace with an ordered
//!   route table, scoped context, and its own interceptor chain
//! - **[`app`]** - [`App`]: the single per-request entry point, owning the
//!   group registry, global context/extensions, and global interceptors
//! - **[`interceptor`]** - the shared ordered transform-chain mechanism
//!   used at both scopes, plus a couple of stock interceptors
//! - **[`context`]** - attribute-style key/value stores; group scopes fall
//!   back to the app scope once linked at registration
//! - **[`server`]** - the [`Request`]/[`Response`] message types exchanged
//!   with the external host HTTP server
//!
//! The host server (socket handling, HTTP parsing, status-line formatting)
//! is an external collaborator: it builds a [`Request`] per inbound
//! request, calls [`App::handle`] (or [`App::respond`] for ready-made
//! 404/500 mapping), and writes the returned [`Response`] to the wire.
//!
//! ## Quick start
//!
//! ```rust
//! use grouter::{App, Group, Request, Response};
//! use http::Method;
//!
//! # fn main() -> grouter::Result<()> {
//! let mut py = Group::new("/python");
//! py.route("/{people_name:any}/{user_id:int}", &[Method::GET], |req| {
//!     Response::html(format!(
//!         "<h1>people: {}, user_id: {}</h1>",
//!         req.vars().str("people_name").unwrap_or(""),
//!         req.vars().int("user_id").unwrap_or(0),
//!     ))
//! })?;
//!
//! let mut app = App::new();
//! app.register_group(py);
//!
//! let res = app.handle(Request::new(Method::GET, "/python/tom/20"))?;
//! assert_eq!(res.status(), 200);
//! # Ok(())
//! # }
//! ```
//!
//! ## Lifecycle
//!
//! Groups, routes, interceptors, and extensions are registered at startup
//! (`&mut self` methods); serving is `&self` and safe to share across the
//! host's worker threads. Route and group mismatches are silent control
//! flow; a total miss is [`Error::NotFound`], and a failed variable cast
//! propagates to the host boundary unrecovered.

pub mod app;
pub mod context;
mod error;
pub mod interceptor;
pub mod pattern;
pub mod router;
pub mod server;

pub use app::{jsonify, App};
pub use context::{Context, ScopedContext};
pub use error::{Error, Result};
pub use interceptor::{InterceptorChain, JsonifyInterceptor, PostInterceptor, PreInterceptor, TraceInterceptor};
pub use router::{Dispatch, Group, GroupInfo, GROUP_CTX_KEY};
pub use server::{Body, HeaderVec, PathVars, Request, Response};
