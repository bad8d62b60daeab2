//! Output abstraction
//!
//! Outgoing frames are written one JSON document per line. Writing goes
//! through a trait so the console can be driven in tests without stdout.

use std::io::{self, Write};

/// Trait for writing output lines
pub trait OutputWriter {
    /// Write one line; the newline is added.
    fn writeln(&mut self, line: &str);
}

/// Writes to stdout, flushing after every line so peers see frames promptly.
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn writeln(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            log::error!("failed to write frame: {}", e);
        }
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;

    /// Mock output writer for testing
    #[derive(Debug, Default)]
    pub struct MockOutput {
        pub lines: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every captured line parsed back into JSON.
        pub fn frames(&self) -> Vec<serde_json::Value> {
            self.lines
                .iter()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, line: &str) {
            self.lines.push(line.to_string());
        }
    }
}
