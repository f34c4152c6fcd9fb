//! Source text assembly and file output.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Accumulates generated source text line by line.
///
/// Generated output is spliced verbatim into the consumer's source tree, so
/// the builder adds nothing on its own: no banner, no indentation, no
/// trailing separators.
#[derive(Debug, Default)]
pub struct SourceFile {
    /// The accumulated text.
    pub buf: String,
}

impl SourceFile {
    /// Creates an empty source file buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4 * 1024),
        }
    }

    /// Appends one line followed by a newline.
    pub fn line(&mut self, line: &str) {
        // Writing to a String cannot fail.
        let _ = writeln!(self.buf, "{line}");
    }

    /// Appends a blank line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Consumes the builder and returns the accumulated text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes generated content to `path`, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns an error if a directory or the file itself cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_and_blanks() {
        let mut f = SourceFile::new();
        f.line("if (a) {");
        f.blank();
        f.line("}");
        assert_eq!(f.finish(), "if (a) {\n\n}\n");
    }

    #[test]
    fn empty_builder_yields_empty_text() {
        assert_eq!(SourceFile::new().finish(), "");
    }
}
