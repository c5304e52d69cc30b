//! Rules domain module (business conditions as value objects).
//!
//! A rule names an attribute, a comparison operator and a threshold. Rules are
//! compared by value: two rules built from the same parts are equal. Nothing in
//! this crate evaluates a rule against data.

pub mod rule;

pub use rule::Rule;
