//! Lantern - HTTP/1.0 static file server
//!
//! Core library for request parsing, path confinement and file serving.

pub mod config;
pub mod http;
pub mod server;
