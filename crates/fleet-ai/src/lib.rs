//! Compliance rule engine and AI dispatch assistant for small road-haulage
//! fleets.
//!
//! The [`fleet`] module holds the domain: snapshot types, the compliance
//! rules that turn a snapshot plus an evaluation day into findings, and the
//! dispatch workflow that feeds those findings to a completion model.
//! [`config`], [`telemetry`] and [`error`] carry the service plumbing.

pub mod config;
pub mod error;
pub mod fleet;
pub mod telemetry;
