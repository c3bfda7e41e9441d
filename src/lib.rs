//! Seamless - zero-downtime TCP reverse proxy
//!
//! Forwards inbound TCP connections to a mutable, round-robin list of
//! backend addresses. The list is changed at runtime over a small HTTP
//! control interface, so traffic can be moved to a new backend without
//! restarting the proxy or disturbing connections already in flight.

pub mod config;
pub mod control;
pub mod proxy;
pub mod server;
