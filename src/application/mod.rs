//! Application Layer
//!
//! Use cases orchestrating the domain ports.

mod cache_gate;

pub use cache_gate::CacheGate;
