//! Callback service middleware module.
//!
//! # Metrics
//!
//! The metrics middleware collects Prometheus metrics about handshakes and messages.

pub mod metrics;
