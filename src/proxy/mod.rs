//! Proxy data plane
//!
//! Backend selection and per-connection forwarding. The registry is the
//! one piece of shared mutable state in the process; everything else
//! reads it once per accepted connection.

pub mod forwarder;
pub mod registry;

pub use registry::{BackendRegistry, EmptyRegistry};
