//! docroot - static file server
//!
//! Serves files from a document root, one connection at a time.

pub mod config;
pub mod http;
pub mod server;
