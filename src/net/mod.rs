//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `catalog` is the asynchronous project source (a simulated-latency stand-in
//! for a real fetch) and `api` is the contact relay POST. Both gate their
//! browser behavior behind the `csr` feature so contracts stay testable on
//! the host toolchain.

pub mod api;
pub mod catalog;
