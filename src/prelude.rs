//! Prelude module for kitchen_calendar crate.
//!
//! Re-exports the derive macros used across modules.

#[allow(unused_imports)]
pub use derive_more::Display;
