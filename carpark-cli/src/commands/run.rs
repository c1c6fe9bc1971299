//! Run command implementation.
//!
//! With no file the session is interactive on stdin; with one file every
//! line of it is executed. Responses always go to stdout.

use crate::error::{CliError, USAGE};
use crate::utils::{load_configuration, resolve_logger, GlobalOptions};
use carpark::{install_logger, Config, Session, SessionSummary};
use clap::Args;
use std::io;
use std::path::{Path, PathBuf};

/// Run a parking lot session.
#[derive(Args)]
pub struct RunCommand {
    /// File of commands to run; reads stdin interactively when omitted
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Prompt shown before each interactive command
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Echo each command from the file before its response
    #[arg(long)]
    pub echo: bool,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate arguments before touching any input
        let input = self.input_file()?.map(Path::to_path_buf);

        // 2. Load configuration, with flags as the top layer
        let config = load_configuration(global, self.overrides())?;

        // 3. Route library logging through the selected logger
        let logger = resolve_logger(global, &config);
        if install_logger(logger).is_err() {
            logger.debug("global logger already installed");
        }

        // 4. Run the session
        let mut session = Session::from_config(&config);
        let summary = run_session(&mut session, input.as_deref())?;

        logger.info(&format!(
            "session finished after {} command(s){}",
            summary.commands,
            if summary.exited { " (exit)" } else { "" }
        ));
        Ok(())
    }

    /// Returns the input file, or `None` for interactive mode.
    fn input_file(&self) -> Result<Option<&Path>, CliError> {
        match self.files.as_slice() {
            [] => Ok(None),
            [file] => Ok(Some(file)),
            _ => Err(CliError::InvalidArguments(USAGE.to_string())),
        }
    }

    fn overrides(&self) -> Config {
        Config {
            prompt: self.prompt.clone(),
            echo: self.echo.then_some(true),
            ..Config::default()
        }
    }
}

fn run_session(session: &mut Session, input: Option<&Path>) -> Result<SessionSummary, CliError> {
    let stdout = io::stdout();
    let summary = match input {
        Some(path) => session.run_file(path, stdout.lock())?,
        None => {
            let stdin = io::stdin();
            session.run_interactive(stdin.lock(), stdout.lock())?
        }
    };
    Ok(summary)
}
