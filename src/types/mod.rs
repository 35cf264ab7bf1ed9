//! Assorted types used across the library.

pub mod err;
