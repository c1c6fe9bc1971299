//! Session driver: feeds input lines to the dispatcher.
//!
//! Two modes exist. Interactive mode prints a prompt before every line and
//! is meant for a terminal; script mode reads a file (or any reader) from top
//! to bottom. Both stop at end of input or at an `exit` command.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::ops::ControlFlow;
use std::path::Path;

use crate::command::Dispatcher;
use crate::config::{Config, DEFAULT_PROMPT};
use crate::error::{Error, Result};
use crate::lot::ParkingLot;

/// Presentation options for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Prompt printed before each interactive command.
    pub prompt: String,
    /// Write each script command before its response.
    pub echo: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            echo: false,
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            prompt: config.prompt().to_string(),
            echo: config.echo(),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Number of non-blank lines dispatched, including `exit`.
    pub commands: usize,
    /// `true` if the session stopped because of an `exit` command.
    pub exited: bool,
}

/// A parking lot session.
///
/// # Examples
///
/// ```
/// use carpark::{Session, SessionOptions};
///
/// let script = "create_parking_lot 1\npark KA-01-HH-1234 White\npark KA-01-HH-9999 Red\n";
/// let mut out = Vec::new();
///
/// let mut session = Session::new(SessionOptions::default());
/// let summary = session.run_script(script.as_bytes(), &mut out).unwrap();
///
/// assert_eq!(summary.commands, 3);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Created parking lot with 1 slots\nAllocated slot number: 1\nSorry, parking lot is full\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Session {
    dispatcher: Dispatcher,
    options: SessionOptions,
}

impl Session {
    /// Creates a session whose lot is not created yet.
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            options,
        }
    }

    /// Creates a session from configuration.
    ///
    /// When `capacity` is configured the lot starts out created with that
    /// many slots.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let lot = config
            .capacity
            .map(ParkingLot::with_capacity)
            .unwrap_or_default();
        Self {
            dispatcher: Dispatcher::with_lot(lot),
            options: SessionOptions::from(config),
        }
    }

    /// Returns the session's options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the dispatcher, and through it the lot.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Runs an interactive session: prompt, read a line, respond, repeat.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading `input` or writing `out` fails.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            write!(out, "{}", self.options.prompt)?;
            out.flush()?;

            let Some(line) = read_line(&mut input, &mut buf)? else {
                log::debug!("end of input after {} command(s)", summary.commands);
                break;
            };

            if self.step(&line, &mut out, &mut summary)?.is_break() {
                break;
            }
        }

        Ok(summary)
    }

    /// Runs every line of `input` in order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading `input` or writing `out` fails.
    pub fn run_script<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        while let Some(line) = read_line(&mut input, &mut buf)? {
            let line = line.trim_end_matches(['\n', '\r']);
            if self.options.echo && !line.trim().is_empty() {
                writeln!(out, "{line}")?;
            }
            if self.step(line, &mut out, &mut summary)?.is_break() {
                break;
            }
        }

        out.flush()?;
        Ok(summary)
    }

    /// Runs every line of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be opened, or an I/O
    /// error while reading it or writing `out`.
    pub fn run_file<W: Write>(&mut self, path: &Path, out: W) -> Result<SessionSummary> {
        let file = File::open(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::info!("running commands from {}", path.display());
        self.run_script(BufReader::new(file), out)
    }

    fn step<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        summary: &mut SessionSummary,
    ) -> Result<ControlFlow<()>> {
        if line.trim().is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        summary.commands += 1;
        let flow = self.dispatcher.dispatch(line, out)?;
        if flow.is_break() {
            summary.exited = true;
        }
        Ok(flow)
    }
}

/// Reads one raw line into `buf` and decodes it, replacing invalid UTF-8.
///
/// Returns `None` at end of input.
fn read_line<'a, R: BufRead>(
    input: &mut R,
    buf: &'a mut Vec<u8>,
) -> Result<Option<Cow<'a, str>>> {
    buf.clear();
    let read = input.read_until(b'\n', buf).map_err(|e| {
        log::warn!("failed to read command: {e}");
        Error::Io(e)
    })?;
    if read == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(buf);
    if matches!(line, Cow::Owned(_)) {
        log::debug!("replaced invalid UTF-8 in input line");
    }
    Ok(Some(line))
}
