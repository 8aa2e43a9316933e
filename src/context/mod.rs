//! Reading and rewriting the individual source files of a bundle.

pub mod gather;
pub mod transform;
pub mod types;
