//! Statement emission.
//!
//! The output channel is the only externally observable artifact: rendered
//! statements are written as text, one per line, and nothing is executed.

use crate::error::Result;
use std::io::{self, Write};

/// Writes rendered statements to an output sink.
pub struct Emitter<W: Write> {
    sink: W,
    emitted: usize,
}

impl Emitter<io::Stdout> {
    /// An emitter writing to standard output.
    pub fn stdout() -> Self {
        Emitter::new(io::stdout())
    }
}

impl<W: Write> Emitter<W> {
    /// Create an emitter over an arbitrary sink.
    pub fn new(sink: W) -> Self {
        Self { sink, emitted: 0 }
    }

    /// Emit one statement followed by a newline.
    pub fn emit(&mut self, statement: &str) -> Result<()> {
        writeln!(self.sink, "{}", statement)?;
        self.emitted += 1;
        tracing::debug!(bytes = statement.len(), "emitted statement");
        Ok(())
    }

    /// Number of statements emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Consume the emitter and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_writes_statement_lines() {
        let mut emitter = Emitter::new(Vec::new());
        emitter.emit("CREATE TABLE IF NOT EXISTS t (a INTEGER);").unwrap();
        emitter.emit("INSERT INTO t (a) VALUES ('1');").unwrap();

        assert_eq!(emitter.emitted(), 2);
        let output = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(
            output,
            "CREATE TABLE IF NOT EXISTS t (a INTEGER);\nINSERT INTO t (a) VALUES ('1');\n"
        );
    }

    #[test]
    fn test_sink_failure_surfaces_as_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut emitter = Emitter::new(Broken);
        assert!(emitter.emit("x;").is_err());
        assert_eq!(emitter.emitted(), 0);
    }
}
