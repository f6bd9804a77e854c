//! Adapters behind the domain ports: the in-memory stores and the acquirer
//! HTTP client.

pub mod acquirer;
pub mod in_memory;
