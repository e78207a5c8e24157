//! # App Module
//!
//! The top-level dispatcher. An [`App`] owns the ordered group registry,
//! the global context (which doubles as the extension registry), and the
//! global interceptor chain. It is constructed once at startup, assembled
//! through its registration methods, and then invoked by the host server
//! once per inbound request.
//!
//! ## Request flow
//!
//! ```text
//! Received → global pre-interceptors
//!          → for each group (registration order):
//!                prefix check → group pre-interceptors
//!                → route match → handler → group post-interceptors
//!          → global post-interceptors → Returned
//! ```
//!
//! If every group signals no-match the request terminates in
//! [`crate::Error::NotFound`]; global post-interceptors only ever observe a
//! response some group actually produced.
//!
//! ## Example
//!
//! ```rust
//! use grouter::{jsonify, App, Group, Response};
//! use http::Method;
//!
//! # fn main() -> grouter::Result<()> {
//! let mut py = Group::new("/python");
//! py.route("/{people_name:any}/{user_id:int}", &[Method::GET], |req| {
//!     Response::ok(format!("user {}", req.vars().int("user_id").unwrap_or(0)))
//! })?;
//!
//! let mut app = App::new();
//! app.register_group(py);
//!
//! let req = grouter::Request::new(Method::GET, "/python/tom/20");
//! let res = app.handle(req)?;
//! assert_eq!(res.status(), 200);
//! # Ok(())
//! # }
//! ```

mod core;

pub use core::{jsonify, App};
