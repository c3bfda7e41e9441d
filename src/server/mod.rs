//! Public listener
//!
//! The accept loop that feeds the data plane.

pub mod listener;
