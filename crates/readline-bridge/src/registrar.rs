//! Binding registrar
//!
//! At load time, wraps each native operation in a [`HostFunction`] record,
//! binds it to its stable public name and announces the bridge's feature
//! identifier. This runs once per process load under the host-loader
//! contract; it performs no I/O and cannot fail. Re-entry is tolerated:
//! rebinding replaces each record wholesale and never corrupts prior
//! bindings.

use std::cell::RefCell;
use std::rc::Rc;

use crate::editor::LineEditor;
use crate::host::HostEnv;
use crate::ops::{self, OpError};
use crate::signal;

/// Feature identifier announced once all four names are bound.
pub const FEATURE: &str = "readline-bridge";

/// A bound function record: public name, arity bounds, documentation and the
/// native entry point. The shared editor handle lives inside the entry
/// closure as the record's opaque context.
///
/// Records are created once during [`install`] and never mutated afterwards.
pub struct HostFunction<H: HostEnv> {
    name: &'static str,
    min_arity: usize,
    max_arity: usize,
    doc: &'static str,
    run: Rc<dyn Fn(&mut H, &[H::Value]) -> Result<H::Value, OpError>>,
}

impl<H: HostEnv> Clone for HostFunction<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            min_arity: self.min_arity,
            max_arity: self.max_arity,
            doc: self.doc,
            run: Rc::clone(&self.run),
        }
    }
}

impl<H: HostEnv> HostFunction<H> {
    pub fn new(
        name: &'static str,
        min_arity: usize,
        max_arity: usize,
        doc: &'static str,
        run: impl Fn(&mut H, &[H::Value]) -> Result<H::Value, OpError> + 'static,
    ) -> Self {
        Self {
            name,
            min_arity,
            max_arity,
            doc,
            run: Rc::new(run),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_arity(&self) -> usize {
        self.min_arity
    }

    pub fn max_arity(&self) -> usize {
        self.max_arity
    }

    pub fn doc(&self) -> &'static str {
        self.doc
    }

    /// Trampoline: validate arity, run the operation and translate any
    /// failure into the host's signal mechanism.
    ///
    /// Once a signal has been raised the returned value is the nil token,
    /// which the host ignores in favor of the pending signal.
    pub fn call(&self, env: &mut H, args: &[H::Value]) -> H::Value {
        if args.len() < self.min_arity || args.len() > self.max_arity {
            let message = format!(
                "{} expects {} argument{}, got {}",
                self.name,
                self.min_arity,
                if self.min_arity == 1 { "" } else { "s" },
                args.len()
            );
            let name_value = env.make_text(self.name.as_bytes());
            let message_value = env.make_text(message.as_bytes());
            env.signal(signal::WRONG_ARITY, vec![name_value, message_value]);
            return env.nil();
        }

        match (self.run)(env, args) {
            Ok(value) => value,
            Err(OpError::Host(_)) => env.nil(),
            Err(OpError::Io { function, source }) => {
                signal::signal_io(env, function, &source);
                env.nil()
            }
        }
    }
}

/// Bind the four native operations and announce the bridge.
///
/// All four bindings are fixed-arity 1 and share one collaborator instance.
/// The returned handle is the same shared context captured by the bound
/// records, so the embedder can keep configuring or observing the
/// collaborator after installation.
pub fn install<H, E>(env: &mut H, editor: E) -> Rc<RefCell<E>>
where
    H: HostEnv + 'static,
    E: LineEditor + 'static,
    <H as HostEnv>::Value: 'static,
{
    let editor = Rc::new(RefCell::new(editor));

    bind(
        env,
        "readline-bridge-read-line",
        "Read one line under PROMPT; nil on end of input.",
        &editor,
        ops::read_line_with_prompt,
    );
    bind(
        env,
        "readline-bridge-add-history",
        "Append LINE to the in-memory history list.",
        &editor,
        ops::append_to_history,
    );
    bind(
        env,
        "readline-bridge-read-history",
        "Load history entries from the file at PATH.",
        &editor,
        ops::load_history_from_file,
    );
    bind(
        env,
        "readline-bridge-write-history",
        "Save the history list to the file at PATH.",
        &editor,
        ops::save_history_to_file,
    );

    env.provide(FEATURE);
    editor
}

fn bind<H, E>(
    env: &mut H,
    name: &'static str,
    doc: &'static str,
    editor: &Rc<RefCell<E>>,
    op: fn(&mut H, &mut dyn LineEditor, &[H::Value]) -> Result<H::Value, OpError>,
) where
    H: HostEnv + 'static,
    E: LineEditor + 'static,
    <H as HostEnv>::Value: 'static,
{
    let editor = Rc::clone(editor);
    env.bind_function(HostFunction::new(name, 1, 1, doc, move |env, args| {
        op(env, &mut *editor.borrow_mut(), args)
    }));
}
