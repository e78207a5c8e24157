//! # Server Boundary Module
//!
//! Request and response message types exchanged with the external host HTTP
//! server. The core neither opens sockets nor parses wire bytes: the host
//! (a WSGI-style adapter, a test harness, anything that can build a
//! [`Request`] and consume a [`Response`]) drives [`crate::App`] once per
//! inbound request.
//!
//! A [`Request`] carries the method, path, and headers parsed by the host;
//! during dispatch the matching group attaches a read-only [`PathVars`] bag
//! of typed path variables. A [`Response`] carries status, content type,
//! and a body that is either text or structured data still to be
//! serialized (see [`crate::app::jsonify`]).

mod request;
mod response;

pub use request::{HeaderVec, PathVars, Request, MAX_INLINE_HEADERS};
pub use response::{Body, Response};
