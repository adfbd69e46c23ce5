//! Shared plumbing for greeter services: env config, tracing setup,
//! request-id middleware and health probes.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
