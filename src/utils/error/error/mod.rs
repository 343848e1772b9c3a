//! Error handling for the Gateway
//!
//! This module defines the error type returned by the dispatcher and its
//! mapping onto the `{ "error": ... }` response envelope.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use types::{GatewayError, Result};
