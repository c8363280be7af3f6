// response-writer/src/transport.rs

/// Write surface for one outgoing response.
///
/// Implemented by the HTTP layer that actually delivers bytes to the
/// client. Header writes are additive: appending a line for a name that
/// was already written produces a second header line, never a
/// replacement.
pub trait Transport {
    /// Set the outgoing status line.
    fn set_status(&mut self, code: u16);

    /// Append one header line in `"Name: Value"` form.
    fn append_header(&mut self, raw: &str);

    /// Write to the response body. Correct usage calls this at most
    /// once per response.
    fn write_body(&mut self, body: &str);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn set_status(&mut self, code: u16) {
        (**self).set_status(code);
    }

    fn append_header(&mut self, raw: &str) {
        (**self).append_header(raw);
    }

    fn write_body(&mut self, body: &str) {
        (**self).write_body(body);
    }
}

/// Transport double that records every call, in order.
///
/// Meant for handler tests: hand it to a `ResponseWriter`, run the
/// handler, then assert on the recorded status, header lines, and body.
/// Body writes accumulate and are counted so a double write is visible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingTransport {
    pub status: Option<u16>,
    pub headers: Vec<String>,
    pub body: String,
    pub body_writes: usize,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for RecordingTransport {
    fn set_status(&mut self, code: u16) {
        self.status = Some(code);
    }

    fn append_header(&mut self, raw: &str) {
        self.headers.push(raw.to_string());
    }

    fn write_body(&mut self, body: &str) {
        self.body.push_str(body);
        self.body_writes += 1;
    }
}
