//! Core functionality for the Gateway
//!
//! This module contains the action dispatcher, the upstream provider and the
//! trait that joins them.

pub mod dispatch;
pub mod providers;
pub mod traits;
