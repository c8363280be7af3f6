// response-writer/src/writer.rs

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CommitSource, ResponseError};
use crate::transport::Transport;
use crate::Result;

/// Construction-time configuration for a [`ResponseWriter`].
///
/// Every field carries the default the writer assumes when the handler
/// does not care: status 200, `application/json`, no extra headers, no
/// pre-supplied body.
#[derive(Debug, Clone)]
pub struct ResponseOptions {
    pub status: u16,
    pub content_type: String,
    pub headers: Vec<String>,
    pub output: Option<String>,
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: "application/json".into(),
            headers: Vec::new(),
            output: None,
        }
    }
}

impl ResponseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Append one raw `"Name: Value"` header line.
    pub fn header(mut self, raw: impl Into<String>) -> Self {
        self.headers.push(raw.into());
        self
    }

    /// Pre-supply the body. A non-empty value commits the writer the
    /// moment it is constructed.
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// One response cycle: configure status and headers, then emit a body.
///
/// Every mutation is forwarded to the injected transport immediately.
/// Writing a body (a pre-supplied `output` or [`json`](Self::json))
/// commits the response; after commit, [`status`](Self::status),
/// [`headers`](Self::headers), and [`content_type`](Self::content_type)
/// return an error instead of mutating. One instance serves exactly one
/// request and is then discarded.
#[derive(Debug)]
pub struct ResponseWriter<T: Transport> {
    transport: T,
    committed: Option<CommitSource>,
    used_json: bool,
}

impl<T: Transport> ResponseWriter<T> {
    /// Construct with [`ResponseOptions::default`].
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, ResponseOptions::default())
    }

    /// Construct and flush the configuration through the transport, in
    /// order: status line, `Content-Type`, extra headers, then the
    /// optional body. All header writes happen before the body write, so
    /// construction never violates the ordering rule even when it
    /// commits.
    pub fn with_options(transport: T, options: ResponseOptions) -> Self {
        let mut writer = Self {
            transport,
            committed: None,
            used_json: false,
        };
        writer.transport.set_status(options.status);
        writer
            .transport
            .append_header(&format!("Content-Type: {}", options.content_type));
        for raw in &options.headers {
            writer.transport.append_header(raw);
        }
        if let Some(output) = options.output.as_deref() {
            // Empty output is treated the same as no output at all.
            if !output.is_empty() {
                debug!(bytes = output.len(), "body supplied at construction");
                writer.transport.write_body(output);
                writer.committed = Some(CommitSource::ConstructorOutput);
            }
        }
        writer
    }

    /// Serialize `data` and write it as the response body.
    ///
    /// Commits the response. A repeat call is not guarded (the guard
    /// protects header mutation only) and writes a second body; that is
    /// a caller error and is logged, not prevented. Nothing is written
    /// when serialization fails.
    pub fn json(&mut self, data: &impl Serialize) -> Result<()> {
        let body = serde_json::to_string(data)?;
        if self.used_json {
            warn!("json() called more than once; writing another body");
        } else if self.committed.is_some() {
            warn!("json() called after a body was supplied at construction; writing another body");
        }
        self.used_json = true;
        if self.committed.is_none() {
            self.committed = Some(CommitSource::JsonBody);
        }
        debug!(bytes = body.len(), "json body written");
        self.transport.write_body(&body);
        Ok(())
    }

    /// Append raw `"Name: Value"` header lines, in order.
    ///
    /// A later line for a name that was already written is additive,
    /// never a replacement. Fails once the response is committed.
    pub fn headers<I, S>(&mut self, headers: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.check_not_committed()?;
        for raw in headers {
            self.transport.append_header(raw.as_ref());
        }
        Ok(self)
    }

    /// Set the status line. Fails once the response is committed.
    pub fn status(&mut self, code: u16) -> Result<&mut Self> {
        self.check_not_committed()?;
        self.transport.set_status(code);
        Ok(self)
    }

    /// Set the `Content-Type` header. Shorthand for
    /// `headers(["Content-Type: <value>"])`, with the same guard.
    pub fn content_type(&mut self, value: &str) -> Result<&mut Self> {
        self.headers([format!("Content-Type: {value}")])
    }

    /// True once a body write has committed the response.
    pub fn is_committed(&self) -> bool {
        self.committed.is_some()
    }

    /// True once `json()` has been called.
    pub fn used_json(&self) -> bool {
        self.used_json
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    // The single guard behind headers()/status()/content_type(). The
    // error variant follows the commit path that fired first: output at
    // construction wins over a later json() call.
    fn check_not_committed(&self) -> Result<()> {
        match self.committed {
            None => Ok(()),
            Some(CommitSource::ConstructorOutput) => {
                warn!("header mutation rejected: body was supplied at construction");
                Err(ResponseError::CommittedByOutput)
            }
            Some(CommitSource::JsonBody) => {
                warn!("header mutation rejected: json() already wrote the body");
                Err(ResponseError::CommittedByJson)
            }
        }
    }
}
