//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
