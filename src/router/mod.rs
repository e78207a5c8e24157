//! # Router Module
//!
//! Group-scoped route tables and first-match dispatch.
//!
//! ## Overview
//!
//! A [`Group`] owns one path-prefix namespace (`/python`, `/java`, ...),
//! an ordered route table, its own [`crate::ScopedContext`], and its own
//! interceptor chain. Dispatch proceeds in two phases:
//!
//! 1. **Prefix check**: a cheap string-prefix test on the raw path; a miss
//!    signals no-match immediately, without running interceptors.
//!
//! 2. **Route match**: the prefix is stripped and the remaining path is
//!    tested against each route's compiled pattern in registration order,
//!    restricted to routes whose method set allows the request method.
//!    The first structural match wins, its captures are cast and attached
//!    to the request, and the handler runs between the group's pre and
//!    post interceptors.
//!
//! Prefix stripping is naive substring removal: the prefix text, if it
//! reoccurs deeper in the path, is stripped there too. That quirk is part
//! of the dispatch contract and is preserved, not fixed.
//!
//! ## Example
//!
//! ```rust
//! use grouter::{Group, Response};
//! use http::Method;
//!
//! # fn main() -> grouter::Result<()> {
//! let mut py = Group::new("/python");
//! py.route("/{people_name:any}/{user_id:int}", &[], |req| {
//!     Response::ok(format!(
//!         "people: {:?}, user_id: {:?}",
//!         req.vars().str("people_name"),
//!         req.vars().int("user_id"),
//!     ))
//! })?;
//! # Ok(())
//! # }
//! ```

mod core;

pub use core::{Dispatch, Group, GroupInfo, Handler, GROUP_CTX_KEY};
