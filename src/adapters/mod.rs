//! Adapters Layer
//!
//! Outbound adapters implementing the domain ports.

pub mod outbound;
