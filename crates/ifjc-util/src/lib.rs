//! ifjc-util - Shared infrastructure for the IFJ25 compiler.
//!
//! This crate provides the types every compiler phase depends on:
//!
//! - [`Span`]: source location tracking (byte offsets plus 1-based
//!   line/column) attached to tokens, AST nodes, and diagnostics.
//! - [`CompileError`] / [`ErrorKind`]: the single error type that flows
//!   outward from every stage. Each kind maps to the process exit code
//!   the driver reports (lexical = 1, syntax = 2, and so on up to
//!   internal = 99).
//!
//! Stages return `ifjc_util::Result<T>` and propagate with `?`; the first
//! error aborts the pipeline, and the driver turns it into a one-line
//! `line:col: message` diagnostic on stderr plus the mapped exit code.

pub mod error;
pub mod span;

pub use error::{CompileError, ErrorKind, Result};
pub use span::Span;
