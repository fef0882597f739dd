//! Shared test host and scripted collaborator
//!
//! `MockHost` is a minimal scripting-runtime stand-in: text values are
//! opaque handles, decode goes through the two-phase copy protocol, signals
//! land in a pending slot (first one wins), and bound functions live in a
//! name table. `ScriptedEditor` replays queued input lines and persists
//! history as one entry per line.

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

use readline_bridge::host::{HostEnv, HostFault};
use readline_bridge::registrar::HostFunction;
use readline_bridge::LineEditor;

#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Text(Rc<Vec<u8>>),
    Nil,
    /// A non-text value, for exercising decode type faults.
    Number(f64),
}

#[derive(Default)]
pub struct MockHost {
    functions: HashMap<&'static str, HostFunction<MockHost>>,
    features: Vec<&'static str>,
    pending: Option<(&'static str, Vec<HostValue>)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, text: &str) -> HostValue {
        self.make_text(text.as_bytes())
    }

    /// Invoke a bound function by its public name, as host code would.
    pub fn call(&mut self, name: &str, args: &[HostValue]) -> HostValue {
        let function = self
            .functions
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("no binding named {name}"));
        function.call(self, args)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn binding(&self, name: &str) -> Option<&HostFunction<MockHost>> {
        self.functions.get(name)
    }

    pub fn provided(&self, feature: &str) -> bool {
        self.features.iter().any(|f| *f == feature)
    }

    /// Consume the pending signal, if any.
    pub fn take_signal(&mut self) -> Option<(&'static str, Vec<HostValue>)> {
        self.pending.take()
    }

    pub fn text_of(value: &HostValue) -> String {
        match value {
            HostValue::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            other => panic!("expected a text value, got {other:?}"),
        }
    }
}

impl HostEnv for MockHost {
    type Value = HostValue;

    fn copy_text_contents(
        &mut self,
        value: &HostValue,
        into: Option<&mut [u8]>,
    ) -> Result<usize, HostFault> {
        let bytes = match value {
            HostValue::Text(bytes) => Rc::clone(bytes),
            other => {
                let offender = other.clone();
                self.signal("wrong-type-argument", vec![offender]);
                return Err(HostFault);
            }
        };
        if let Some(buffer) = into {
            buffer.copy_from_slice(&bytes);
        }
        Ok(bytes.len())
    }

    fn make_text(&mut self, contents: &[u8]) -> HostValue {
        HostValue::Text(Rc::new(contents.to_vec()))
    }

    fn nil(&mut self) -> HostValue {
        HostValue::Nil
    }

    fn signal(&mut self, kind: &'static str, payload: Vec<HostValue>) {
        // First signal wins, like a pending non-local exit.
        if self.pending.is_none() {
            self.pending = Some((kind, payload));
        }
    }

    fn bind_function(&mut self, function: HostFunction<Self>) {
        self.functions.insert(function.name(), function);
    }

    fn provide(&mut self, feature: &'static str) {
        if !self.features.contains(&feature) {
            self.features.push(feature);
        }
    }
}

#[derive(Default)]
pub struct ScriptedEditor {
    input: VecDeque<String>,
    pub prompts: Vec<String>,
    pub history: Vec<String>,
}

impl ScriptedEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Vec::new(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front()
    }

    fn append_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn load_history(&mut self, path: &Path) -> io::Result<()> {
        let text = fs::read_to_string(path)?;
        self.history.extend(text.lines().map(String::from));
        Ok(())
    }

    fn save_history(&mut self, path: &Path) -> io::Result<()> {
        let mut text = self.history.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        fs::write(path, text)
    }
}
