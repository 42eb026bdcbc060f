//! HTTP/1.0 static file serving.
//!
//! One request per connection: read the request line, map the target to a
//! file under the content root, send the file (or a fixed error page) and
//! close.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Parses the request line out of the raw bytes
//! - **`request`**: Request and method types
//! - **`path`**: Turns a request target into a root-confined path
//! - **`mime`**: MIME type detection based on file extensions
//! - **`response`**: Status codes, fixed error pages, response builder
//! - **`writer`**: Serializes and writes responses to the client
//! - **`error`**: The error taxonomy and its status mapping
//! - **`site`**: Read-only context shared by all connections
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │  ReadingRequest  │ ← Read up to the request line or size bound
//!        └────────┬─────────┘
//!                 │ parsed           (400 / 500 → Writing)
//!                 ▼
//!        ┌──────────────────┐
//!        │      Parsed      │        (not GET/HEAD: 501 → Writing)
//!        └────────┬─────────┘
//!                 │ path resolved
//!                 ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← stat + open (404 / 500 → Writing)
//!        └────────┬─────────┘
//!                 ▼
//!        ┌──────────────────┐
//!        │     Serving      │ ← read whole file (500 on short read)
//!        └────────┬─────────┘
//!                 ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← headers + body in one buffer
//!        └────────┬─────────┘
//!                 ├─ Responded
//!                 └─ Closed (after a fault, or a failed write)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lantern::http::{connection::Connection, site::Site};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let site = Arc::new(Site::new("./public"));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let site = site.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, site);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod path;
pub mod request;
pub mod response;
pub mod site;
pub mod writer;
