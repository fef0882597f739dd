//! Line-editing collaborator seam
//!
//! The bridge does not implement terminal handling, cursor movement or
//! history search; it delegates to an external line editor behind the
//! [`LineEditor`] trait. [`ReadlineEditor`] is the production implementation
//! over `rustyline`.

use std::io;
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;

/// The four primitives the bridge requires from its line-editing
/// collaborator.
///
/// All calls are synchronous and run on the calling thread; `read_line`
/// blocks for as long as the user takes to submit a line.
pub trait LineEditor {
    /// Blocking read of one line under `prompt`. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Append `line` to the in-memory history list.
    fn append_history(&mut self, line: &str);

    /// Load history entries from the file at `path`.
    fn load_history(&mut self, path: &Path) -> io::Result<()>;

    /// Save the history list to the file at `path`.
    fn save_history(&mut self, path: &Path) -> io::Result<()>;
}

/// Production collaborator backed by `rustyline`.
pub struct ReadlineEditor {
    inner: DefaultEditor,
}

impl ReadlineEditor {
    pub fn new() -> io::Result<Self> {
        let inner = DefaultEditor::new().map_err(history_error)?;
        Ok(Self { inner })
    }

    /// Number of entries currently in the in-memory history list.
    pub fn history_len(&self) -> usize {
        self.inner.history().len()
    }
}

impl LineEditor for ReadlineEditor {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        // End-of-file, interrupt and terminal failures all read as end of
        // input; the read path never reports an error upward.
        self.inner.readline(prompt).ok()
    }

    fn append_history(&mut self, line: &str) {
        let _ = self.inner.add_history_entry(line);
    }

    fn load_history(&mut self, path: &Path) -> io::Result<()> {
        self.inner.load_history(path).map_err(history_error)
    }

    fn save_history(&mut self, path: &Path) -> io::Result<()> {
        self.inner.save_history(path).map_err(history_error)
    }
}

/// Unwrap the I/O cause where the collaborator reports one, so the OS error
/// number survives translation.
fn history_error(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}
