//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to hand out one file per connection.
//!
//! # Architecture
//!
//! - **`connection`**: drives one connection through the request-response state machine
//! - **`parser`**: parses the start line and headers from the bytes of a single read
//! - **`request`**: HTTP request representation, header and cookie accessors
//! - **`negotiate`**: decides whether a file may be sent for a given `Accept` header
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of up to 1024 bytes
//!        └──────┬──────┘
//!               ├─ Nothing read → Closed
//!               ├─ Malformed → Writing (400)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Negotiate, look up the file
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! There is no keep-alive: every connection carries exactly one request.

pub mod connection;
pub mod negotiate;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
