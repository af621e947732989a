//! Console presentation adapter
//!
//! Renders an envelope to a text sink with a success/failure distinction.
//! Message selection is deterministic: a successful envelope shows its own
//! message (unless suppressed), falling back to the default success text;
//! a failed envelope shows its messages joined in order.

use std::io::{self, Write};

use crate::response::{DEFAULT_SUCCESS_MESSAGE, Response};

/// Select the single line a consumer should see for this envelope
pub fn display_message<T>(response: &Response<T>, quiet: bool) -> String {
    if response.success {
        match response.messages.first() {
            Some(msg) if !quiet && !msg.is_empty() => msg.clone(),
            _ => DEFAULT_SUCCESS_MESSAGE.to_string(),
        }
    } else {
        response.messages.join("\n")
    }
}

/// Console reporter writing envelopes to a sink
///
/// Generic over the sink so tests can capture output in a buffer.
pub struct ConsoleReporter<W> {
    out: W,
    /// Suppress per-operation success messages
    quiet: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, quiet: false }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Render one envelope under a title
    pub fn report<T>(&mut self, title: &str, response: &Response<T>) -> io::Result<()> {
        let tag = if response.success { " OK " } else { "FAIL" };
        let message = display_message(response, self.quiet);
        writeln!(self.out, "[{}] {}: {}", tag, title, message)
    }
}
