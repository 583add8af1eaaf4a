// Library crate for integration tests; main.rs builds on top of it.

pub mod completion;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod routes;
pub mod server;
pub mod state;
