//! Host adapter writing to a stream.

use std::io::{self, Write};

use zg_01_digest::Digest;
use zg_02_claim::{ExitCode, HostBoundary};

/// Host that prints the journal and claim as hex lines:
///
/// ```text
/// journal: <hex bytes>
/// exit_code: <n>
/// claim: <hex digest>
/// ```
///
/// The boundary calls cannot fail, so the first write error is kept and
/// reported by [`finish`](Self::finish).
pub struct StdoutHost<W: Write = io::Stdout> {
    writer: W,
    error: Option<io::Error>,
}

impl StdoutHost<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for StdoutHost<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutHost<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush and return the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{line}") {
            self.error = Some(e);
        }
    }
}

impl<W: Write> HostBoundary for StdoutHost<W> {
    fn write_output(&mut self, bytes: &[u8]) {
        self.emit(format_args!("journal: {}", hex::encode(bytes)));
    }

    fn finalize(&mut self, exit_code: ExitCode, claim: &Digest) {
        self.emit(format_args!("exit_code: {}", exit_code.0));
        self.emit(format_args!("claim: {claim}"));
    }
}
