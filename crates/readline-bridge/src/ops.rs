//! The four native operations
//!
//! Each operation takes the host environment, the collaborator and the
//! positional arguments, and returns `Result<value, OpError>`. The internals
//! stay exception-free; translation of failures into the host's signal
//! mechanism happens only in the outermost trampoline
//! ([`crate::registrar::HostFunction::call`]).
//!
//! A zero-length decoded string is valid input to every operation and is
//! passed through unchanged. Every decoded buffer is dropped before the
//! operation returns, on the success path and on early returns alike.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::editor::LineEditor;
use crate::host::{HostEnv, HostFault};
use crate::marshal;

/// Failure of a native operation.
#[derive(Debug, Error)]
pub enum OpError {
    /// The host recorded a fault while decoding an argument; unwind without
    /// signaling again.
    #[error(transparent)]
    Host(#[from] HostFault),
    /// A collaborator file-I/O call failed. `function` names the underlying
    /// history primitive for the signal payload.
    #[error("{function}: {source}")]
    Io {
        function: &'static str,
        source: io::Error,
    },
}

/// Read one line with the decoded prompt; nil on end of input.
///
/// Blocks the calling thread until the user submits a line or signals end of
/// input. Never fails at the native-call level.
pub fn read_line_with_prompt<H: HostEnv>(
    env: &mut H,
    editor: &mut dyn LineEditor,
    args: &[H::Value],
) -> Result<H::Value, OpError> {
    let prompt = marshal::decode(env, &args[0])?;
    match editor.read_line(&prompt.as_text()) {
        Some(line) => Ok(marshal::encode(env, line.as_bytes())),
        None => Ok(marshal::encode_absence(env)),
    }
}

/// Append the decoded line to the collaborator's in-memory history list.
pub fn append_to_history<H: HostEnv>(
    env: &mut H,
    editor: &mut dyn LineEditor,
    args: &[H::Value],
) -> Result<H::Value, OpError> {
    let line = marshal::decode(env, &args[0])?;
    editor.append_history(&line.as_text());
    Ok(marshal::encode_absence(env))
}

/// Load history entries from the file named by the decoded path.
pub fn load_history_from_file<H: HostEnv>(
    env: &mut H,
    editor: &mut dyn LineEditor,
    args: &[H::Value],
) -> Result<H::Value, OpError> {
    let path = marshal::decode(env, &args[0])?;
    editor
        .load_history(Path::new(path.as_text().as_ref()))
        .map_err(|source| OpError::Io {
            function: "read_history",
            source,
        })?;
    Ok(marshal::encode_absence(env))
}

/// Save the history list to the file named by the decoded path.
pub fn save_history_to_file<H: HostEnv>(
    env: &mut H,
    editor: &mut dyn LineEditor,
    args: &[H::Value],
) -> Result<H::Value, OpError> {
    let path = marshal::decode(env, &args[0])?;
    editor
        .save_history(Path::new(path.as_text().as_ref()))
        .map_err(|source| OpError::Io {
            function: "write_history",
            source,
        })?;
    Ok(marshal::encode_absence(env))
}
