//! Embedding bridge exposing interactive line editing and history management
//! to a host scripting environment.
//!
//! The bridge does three things:
//! - marshals text across the host/native boundary ([`marshal`]) with a
//!   two-phase copy protocol and explicit buffer ownership,
//! - translates collaborator failures into host signals ([`signal`]),
//! - registers four native operations under stable public names and
//!   announces the bridge as a loadable feature ([`registrar`]).
//!
//! Line editing itself is delegated to an external collaborator behind the
//! [`editor::LineEditor`] trait; the production implementation is
//! `rustyline`. A scripting runtime loads the bridge by implementing
//! [`host::HostEnv`] and calling [`registrar::install`] once from its module
//! loader.

/// Bridge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod config;
pub mod editor;
pub mod host;
pub mod marshal;
pub mod ops;
pub mod registrar;
pub mod signal;

// Re-export commonly used types
pub use config::Config;
pub use editor::{LineEditor, ReadlineEditor};
pub use host::{HostEnv, HostFault};
pub use marshal::NativeBuffer;
pub use ops::OpError;
pub use registrar::{install, HostFunction, FEATURE};
