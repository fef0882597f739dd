//! Error translation to host signals
//!
//! Converts a collaborator failure into the host's non-local exit mechanism.
//! Only the file-I/O operations (history load/save) ever come through here;
//! the interactive read and the in-memory history append cannot fail at the
//! native-call level and never signal.

use std::io;

use crate::host::HostEnv;

/// Fixed category symbol for collaborator I/O failures.
pub const ERROR: &str = "error";

/// Category raised by the trampoline when a bound name is called with the
/// wrong number of arguments.
pub const WRONG_ARITY: &str = "wrong-number-of-arguments";

/// Raise a host signal for a failed collaborator call.
///
/// The payload is the two-element list `(function, message)`: the name of
/// the underlying history primitive and the platform's standard description
/// of the failure (an `io::Error` carries the OS error number and its
/// strerror-style text). After this call the current operation must
/// immediately return the nil token; its return value is ignored once a
/// signal is pending.
pub fn signal_io<H: HostEnv>(env: &mut H, function: &'static str, error: &io::Error) {
    let message = error.to_string();
    let function_value = env.make_text(function.as_bytes());
    let message_value = env.make_text(message.as_bytes());
    env.signal(ERROR, vec![function_value, message_value]);
}
