//! String marshalling across the host boundary
//!
//! Bidirectional, lifetime-safe conversion between host text values and
//! natively-owned buffers:
//! - [`decode`]: host text → [`NativeBuffer`] (two-phase query-then-fill)
//! - [`encode`]: byte span → new host text value
//! - [`encode_absence`]: the host's "no value" token
//!
//! # Memory safety
//!
//! A decoded buffer is owned by the operation that requested it and is
//! released exactly once, when it goes out of scope — on the success path
//! and on every early return alike.

use std::borrow::Cow;

use crate::host::{HostEnv, HostFault};

/// A natively-owned byte sequence with explicit length, produced by
/// [`decode`].
///
/// The length is carried by the buffer itself; contents are never assumed to
/// be terminated, so embedded NUL bytes survive the round trip.
#[derive(Debug)]
pub struct NativeBuffer {
    bytes: Vec<u8>,
}

impl NativeBuffer {
    fn with_len(len: usize) -> Self {
        Self {
            bytes: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The decoded contents as text in the bridge's single fixed encoding
    /// (UTF-8). Undecodable bytes are replaced rather than rejected.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Decode a host text value into a caller-owned [`NativeBuffer`].
///
/// Two-phase protocol: the first host call establishes the required size,
/// the buffer is allocated, then the second call performs the copy. The
/// order must not be reversed. A zero-length text decodes to a zero-length
/// buffer, not a failure.
///
/// Fails only if the host indicates the value is not text — including on the
/// size query itself, which is surfaced before any allocation. In that case
/// the host has already recorded its own fault and the caller must unwind.
pub fn decode<H: HostEnv>(env: &mut H, value: &H::Value) -> Result<NativeBuffer, HostFault> {
    let size = env.copy_text_contents(value, None)?;
    let mut buffer = NativeBuffer::with_len(size);
    env.copy_text_contents(value, Some(buffer.bytes.as_mut_slice()))?;
    Ok(buffer)
}

/// Wrap a byte span into a new host-owned text value.
///
/// The input span is borrowed, not consumed; the host copies it.
pub fn encode<H: HostEnv>(env: &mut H, bytes: &[u8]) -> H::Value {
    env.make_text(bytes)
}

/// The host's canonical "no value" token, used when a line read yields no
/// input.
pub fn encode_absence<H: HostEnv>(env: &mut H) -> H::Value {
    env.nil()
}
