//! # Interceptor Module
//!
//! Ordered request/response transform chains, shared by both dispatch
//! scopes: each [`crate::Group`] runs a chain against its
//! [`crate::ScopedContext`], and the [`crate::App`] runs a global chain
//! against its flat [`crate::Context`].
//!
//! Pre-interceptors receive the owned request and return a possibly
//! replaced one; post-interceptors receive the request plus the owned
//! response and return a possibly replaced response. Both run in
//! registration order. Returning a sensible value is a contract obligation
//! on interceptor authors — the chain does not second-guess what it is
//! handed back.
//!
//! Plain functions and closures register directly thanks to the blanket
//! impls:
//!
//! ```rust
//! use grouter::{Group, Request, ScopedContext};
//!
//! let mut py = Group::new("/python");
//! py.pre_interceptor(|_ctx: &ScopedContext, req: Request| {
//!     // inspect or rewrite, then hand the request back
//!     req
//! });
//! ```

mod core;
mod jsonify;
mod trace;

pub use core::{InterceptorChain, PostInterceptor, PreInterceptor};
pub use jsonify::JsonifyInterceptor;
pub use trace::TraceInterceptor;
