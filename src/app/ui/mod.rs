//! App-level UI composition.

pub mod input;
pub mod panels;
