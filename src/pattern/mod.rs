//! # Pattern Module
//!
//! The pattern module compiles user-facing path templates into matchable
//! patterns with typed, named captures.
//!
//! ## Overview
//!
//! A template is literal text interspersed with tokens of the form `{name}`
//! or `{name:type}`, where `type` is one of `str`, `word`, `int`, `float`,
//! `any`. Compilation happens in two phases:
//!
//! 1. **Translation**: each token is replaced in place by a named-capture
//!    sub-pattern chosen by its [`TypeTag`]; literal text between tokens is
//!    carried through verbatim. Templates may embed raw regex directly
//!    (e.g. `^/?$` as a root route), which survives translation untouched.
//!
//! 2. **Matching**: the compiled pattern must consume the entire remaining
//!    request path (it is anchored at both ends), and every named capture
//!    is cast to its typed [`ParamValue`].
//!
//! Unknown or omitted type names silently fall back to `word`. That is a
//! deliberate, preserved behavior of the template grammar — a typo in a type
//! name narrows the match rather than failing registration.
//!
//! ## Example
//!
//! ```rust
//! use grouter::pattern::{compile, ParamValue};
//!
//! # fn main() -> grouter::Result<()> {
//! let pattern = compile("/student/{name:str}/score/{id:int}")?;
//! let vars = pattern.match_path("/student/tom/score/42")?.unwrap();
//! assert_eq!(vars[0].1, ParamValue::Str("tom".to_string()));
//! assert_eq!(vars[1].1, ParamValue::Int(42));
//! # Ok(())
//! # }
//! ```

mod core;

pub use core::{compile, CompiledPattern, ParamValue, TypeTag, VarVec, MAX_INLINE_VARS};
