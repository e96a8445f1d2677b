//! # cat-core
//!
//! Core types and error definitions shared by the catastrophe-risk crates.
//!
//! This crate provides the primitive numeric aliases and the error hierarchy
//! every other crate in the workspace builds on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_numeric!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for signed day and year counts.
pub type Integer = i32;

/// Alias used for sizes / indices.
pub type Size = usize;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
