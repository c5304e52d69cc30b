//! `ruleval-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod value_object;

pub use value_object::ValueObject;
