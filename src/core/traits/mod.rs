//! Core traits module
//!
//! Contains the abstract interfaces the dispatcher is built on

pub mod backend;

pub use backend::*;
