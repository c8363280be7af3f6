// response-writer/src/lib.rs
//!
//! A thin layer over an HTTP response lifecycle. A handler configures
//! status, headers, and content type, then emits a body (a raw string at
//! construction, or a JSON-serialized value via `json()`). The moment any
//! body bytes are written the response is committed, and every later
//! attempt to touch status or headers fails with a typed error naming the
//! commit cause.
//!
//! The actual byte delivery is behind the [`Transport`] trait, injected
//! at construction, so handlers are testable with [`RecordingTransport`]
//! instead of a live connection.
//!
//! ```
//! use response_writer::{RecordingTransport, ResponseOptions, ResponseWriter};
//!
//! let mut writer = ResponseWriter::with_options(
//!     RecordingTransport::new(),
//!     ResponseOptions::new().content_type("text/html"),
//! );
//! writer.headers(["X-Request-Id: 7"])?;
//! writer.json(&serde_json::json!({ "ok": true }))?;
//!
//! assert!(writer.is_committed());
//! assert!(writer.status(404).is_err());
//! assert_eq!(writer.transport().body, r#"{"ok":true}"#);
//! # Ok::<(), response_writer::ResponseError>(())
//! ```

pub mod error;
pub mod transport;
pub mod writer;

pub use error::{CommitSource, ResponseError};
pub use transport::{RecordingTransport, Transport};
pub use writer::{ResponseOptions, ResponseWriter};

/// Crate result type.
pub type Result<T> = std::result::Result<T, ResponseError>;
