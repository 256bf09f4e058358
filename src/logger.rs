//! Console and file output for fixture text.

use crate::{ansi, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Echoes fixture text to the console and appends it to a file.
///
/// The console gets the coloured view; the file gets the same text with
/// escapes stripped. The file is opened in append mode for each block and
/// closed again, so a failed run leaves every block written before it.
#[derive(Clone, Debug, Default)]
pub struct Logger {
    output: Option<PathBuf>,
    quiet: bool,
}

impl Logger {
    #[must_use]
    pub fn new(output: Option<PathBuf>, quiet: bool) -> Self {
        Logger { output, quiet }
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Removes a stale destination file. Call before the first [`log`](Self::log).
    pub fn clear(&self) -> Result<()> {
        if let Some(path) = self.output.as_deref().filter(|path| path.exists()) {
            fs::remove_file(path)?;
            debug!(path = %path.display(), "removed previous fixture");
        }
        Ok(())
    }

    /// Writes one block of text followed by a newline.
    pub fn log(&self, text: &str) -> Result<()> {
        if !self.quiet {
            println!("{text}");
        }
        if let Some(path) = &self.output {
            let plain = ansi::strip(text);
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{plain}")?;
            debug!(path = %path.display(), bytes = plain.len() + 1, "appended fixture text");
        }
        Ok(())
    }
}
