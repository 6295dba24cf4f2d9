//! Browser API helpers.

pub mod dom;
