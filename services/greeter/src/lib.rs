pub mod config;
pub mod error;
pub mod greeting;
pub mod handlers;
pub mod router;
pub mod server;
