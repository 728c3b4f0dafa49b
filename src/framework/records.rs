//! # Record Sources
//!
//! Both input files are line oriented. [`RecordReader`] walks a source line
//! by line, skips blank lines, numbers the rest and applies the configured
//! [`ParsePolicy`] to lines the parser rejects.
//!
//! Lines are read as raw bytes. A line that is not valid UTF-8 is treated as
//! malformed, so only a failure of the underlying reader stops the source.

use crate::model::{ParseError, ParseErrorKind, ParsePolicy};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

/// Errors that stop a record source early.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The source could not be read past some point.
    #[error("failed to read {kind} source: {source}")]
    Read {
        kind: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A malformed line under [`ParsePolicy::Abort`].
    #[error("malformed {kind} record at {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: ParseError,
    },
}

/// Line-numbering reader over any buffered async source.
pub struct RecordReader<R> {
    reader: R,
    buf: Vec<u8>,
    kind: &'static str,
    policy: ParsePolicy,
    line_no: usize,
    skipped: usize,
}

impl<R: AsyncBufRead + Unpin> RecordReader<R> {
    /// `kind` names the source in logs and errors (e.g. "inventory").
    pub fn new(reader: R, kind: &'static str, policy: ParsePolicy) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            kind,
            policy,
            line_no: 0,
            skipped: 0,
        }
    }

    /// Returns the next well-formed record, or `None` once the source is exhausted.
    pub async fn next_record<T>(
        &mut self,
        parse: impl Fn(usize, &str) -> Result<T, ParseError>,
    ) -> Result<Option<T>, RecordError> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .await
                .map_err(|source| RecordError::Read {
                    kind: self.kind,
                    source,
                })?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = trim_line_ending(&self.buf);
            let parsed = match std::str::from_utf8(line) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => parse(self.line_no, text),
                Err(_) => Err(ParseError {
                    line: self.line_no,
                    reason: ParseErrorKind::InvalidUtf8,
                }),
            };
            match parsed {
                Ok(record) => return Ok(Some(record)),
                Err(e) => self.reject(e)?,
            }
        }
    }

    fn reject(&mut self, e: ParseError) -> Result<(), RecordError> {
        match self.policy {
            ParsePolicy::Skip => {
                warn!(kind = self.kind, line = e.line, error = %e.reason, "Skipping malformed line");
                self.skipped += 1;
                Ok(())
            }
            ParsePolicy::Abort => Err(RecordError::Malformed {
                kind: self.kind,
                source: e,
            }),
        }
    }

    /// Number of malformed lines skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
