//! Integration tests for groovegen
//!
//! These tests drive the public API across module boundaries: dispatcher
//! with a scripted backend, the HTTP app, the Gemini client against a
//! wiremock upstream and the SDK against a running gateway.

pub mod dispatcher_tests;
pub mod http_tests;
