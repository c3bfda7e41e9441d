//! Runtime control interface
//!
//! A small HTTP/1.1 surface for inspecting and mutating the backend
//! registry while the proxy is running:
//!
//! - `/get` — current list, comma-joined
//! - `/set?backends=host:port,host:port` — replace the list wholesale
//! - `/add?backend=host:port` — append one backend
//! - `/remove?backend=host:port` — remove all occurrences of one backend
//!
//! `/current` and `/switch` are kept as aliases for callers of the
//! pre-0.2.0 API.
//!
//! Each control connection runs a small state machine:
//!
//! ```text
//! Reading → Processing → Writing ─┬─ keep-alive → Reading
//!                                 └─ close → Closed
//! ```

pub mod connection;
pub mod handlers;
pub mod parser;
pub mod request;
pub mod response;
pub mod server;
pub mod validate;
pub mod writer;
