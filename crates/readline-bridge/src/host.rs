//! Host environment boundary
//!
//! The bridge never manipulates host values directly: every value received
//! from or returned to the host is an opaque handle (`HostEnv::Value`), and
//! the only way to look inside a text handle is the two-phase copy protocol
//! exposed by [`HostEnv::copy_text_contents`]. A scripting runtime loads the
//! bridge by implementing this trait and handing itself to
//! [`crate::registrar::install`].

use thiserror::Error;

use crate::registrar::HostFunction;

/// Marker for a fault already recorded on the host side.
///
/// Returned by host calls that detected a problem with their inputs (for
/// example, asking for the text contents of a non-text value). The host has
/// already stored its own pending signal; once an operation sees this marker
/// it must unwind without touching the host further, except to produce the
/// ignored return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("host fault pending")]
pub struct HostFault;

/// The embedding surface a host scripting runtime provides to the bridge.
///
/// All methods take `&mut self`: value construction allocates on the host
/// side, and a failing text copy records a fault in the host's pending-exit
/// state.
pub trait HostEnv {
    /// Opaque handle to a host-owned, immutable value.
    type Value: Clone;

    /// Two-phase text extraction.
    ///
    /// With `into = None`, reports the byte length of `value`'s text without
    /// copying anything. With `into = Some(buffer)`, fills the buffer with
    /// the contents. The size query always comes first and the caller
    /// allocates between the two calls; see [`crate::marshal::decode`],
    /// which is the only caller and hides both steps.
    ///
    /// Returns `Err(HostFault)` if `value` is not text, after recording the
    /// wrong-type fault on the host side.
    fn copy_text_contents(
        &mut self,
        value: &Self::Value,
        into: Option<&mut [u8]>,
    ) -> Result<usize, HostFault>;

    /// Wrap a byte span (explicit length, no terminator) into a new
    /// host-owned text value.
    fn make_text(&mut self, contents: &[u8]) -> Self::Value;

    /// The host's canonical "no value" token.
    fn nil(&mut self) -> Self::Value;

    /// Record a non-local exit carrying a symbolic category and a payload.
    ///
    /// Raising a signal does not transfer control in the host's stack frame
    /// — the native operation still returns a value — but the host must
    /// ignore that value and propagate the signal instead. A signal raised
    /// while one is already pending is discarded.
    fn signal(&mut self, kind: &'static str, payload: Vec<Self::Value>);

    /// Bind `function` to its public name, with global-alias semantics:
    /// rebinding a name replaces the previous binding.
    fn bind_function(&mut self, function: HostFunction<Self>)
    where
        Self: Sized;

    /// Announce a feature identifier so host code can test for the bridge's
    /// presence before use.
    fn provide(&mut self, feature: &'static str);
}
