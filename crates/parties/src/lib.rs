//! Parties domain module (invoice clients).
//!
//! Plain data holders; configuration and lifecycle live in the crates that
//! construct them.

pub mod client;

pub use client::Client;
