//! Output backends for star records.
//!
//! This module keeps presentation separate from whatever produced the
//! records: backends implement [`Render`] and are selected by name
//! from a [`Registry`] built by the host at startup.

use std::io::{self, Write};
use std::process;

use crate::error::{Result, StargazeError};
use crate::model::Star;
use crate::spinner::Spinner;

pub mod color;
pub mod text;

pub use color::ColorOutput;
pub use text::TextOutput;

/// A terminal output backend.
///
/// All operations are side-effecting, best-effort writes: a failed
/// write is reported through [`Render::error`] and rendering carries
/// on with the remaining fields. Nothing is returned to the caller.
pub trait Render {
    /// Registry key for this backend.
    fn name(&self) -> &'static str;

    /// Writes `text` highlighted, without a trailing newline, for
    /// progress-style messages meant to be overwritten.
    fn inline(&mut self, text: &str);

    /// Writes `text` as a highlighted line.
    fn info(&mut self, text: &str);

    /// Writes `text` as an alert-colored line on stderr.
    fn error(&mut self, text: &str);

    /// Reports the error and terminates the process. The only
    /// intentional exit path in this crate.
    fn fatal(&mut self, text: &str) -> ! {
        self.error(text);
        process::exit(1);
    }

    /// Writes the one-line form of a star: name, star count, then
    /// language and URL when present.
    fn summary(&mut self, star: &Star);

    /// Writes the full form: the summary line, then tags,
    /// description, homepage, and the starred-on timestamp.
    fn detail(&mut self, star: &Star);

    /// Writes one frame of the working indicator, overwriting the
    /// current terminal line, and advances the cursor.
    fn tick(&mut self, spinner: &mut Spinner);
}

/// Named collection of output backends, built by the host and passed
/// where rendering happens. Registration order is preserved for
/// listing; registering a duplicate name replaces the earlier entry.
#[derive(Default)]
pub struct Registry {
    outputs: Vec<Box<dyn Render>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in backends: `color` and `text`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ColorOutput::new()));
        registry.register(Box::new(TextOutput::new()));
        registry
    }

    pub fn register(&mut self, output: Box<dyn Render>) {
        if let Some(existing) = self
            .outputs
            .iter_mut()
            .find(|o| o.name() == output.name())
        {
            *existing = output;
        } else {
            self.outputs.push(output);
        }
    }

    pub fn select(&mut self, name: &str) -> Result<&mut dyn Render> {
        self.outputs
            .iter_mut()
            .find(|o| o.name() == name)
            .map(|o| &mut **o as &mut dyn Render)
            .ok_or_else(|| StargazeError::UnknownOutput(name.to_string()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.outputs.iter().map(|o| o.name()).collect()
    }
}

/// Writes a full line to stdout, surfacing the failure to the caller
/// so it can be reported without aborting the render.
pub(crate) fn write_line(line: &str) -> io::Result<()> {
    let mut out = io::stdout();
    writeln!(out, "{line}")
}

/// Writes without a newline and flushes, so inline text and spinner
/// frames show up before the line is overwritten.
pub(crate) fn write_inline(text: &str) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "{text}")?;
    out.flush()
}

/// One error line for a batch of write failures collected while
/// rendering a multi-line record.
pub(crate) fn describe_failures(failures: &[io::Error]) -> String {
    let joined = failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("output write failed: {joined}")
}
