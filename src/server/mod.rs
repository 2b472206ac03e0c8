//! Serving files from a document root
//!
//! The listener owns the socket and hands each accepted connection to the
//! static file handler, one at a time.

pub mod docroot;
pub mod handler;
pub mod listener;

pub use docroot::DocumentRoot;
pub use handler::StaticFiles;
pub use listener::Server;
