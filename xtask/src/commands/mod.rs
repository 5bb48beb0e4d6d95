//! Command family implementations.

pub mod tokens;
