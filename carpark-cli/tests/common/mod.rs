//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment with its own working and data directories
//! - Command builders that keep the host's configuration out of the way
//! - The sample command file and its expected output

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every variable the binary reads from the environment.
const CARPARK_ENV_VARS: [&str; 5] = [
    "CARPARK_PROMPT",
    "CARPARK_ECHO",
    "CARPARK_CAPACITY",
    "CARPARK_LOG_MODE",
    "CARPARK_DATA_DIR",
];

/// Test environment with isolated directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as the working directory
    pub temp_path: PathBuf,
    /// Path to the carpark data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("carpark-data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder with no flags and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("carpark").expect("Failed to find carpark binary");
        for var in CARPARK_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a command file, one command per line.
    pub fn write_commands(&self, name: &str, lines: &[&str]) -> PathBuf {
        self.write_file(name, &(lines.join("\n") + "\n"))
    }

    /// Run `lines` as a command file and return stdout.
    ///
    /// # Panics
    /// Panics if the command exits unsuccessfully.
    pub fn run_file(&self, lines: &[&str]) -> String {
        let path = self.write_commands("input.txt", lines);
        let output = self
            .command()
            .arg(&path)
            .output()
            .expect("Failed to run carpark");

        assert!(
            output.status.success(),
            "carpark failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// The sample command file from the problem statement.
#[allow(dead_code)]
pub const SAMPLE_INPUT: &[&str] = &[
    "create_parking_lot 6",
    "park KA-01-HH-1234 White",
    "park KA-01-HH-9999 White",
    "park KA-01-BB-0001 Black",
    "park KA-01-HH-7777 Red",
    "park KA-01-HH-2701 Blue",
    "park KA-01-HH-3141 Black",
    "leave 4",
    "status",
    "park KA-01-P-333 White",
    "park DL-12-AA-9999 White",
    "registration_numbers_for_cars_with_colour White",
    "slot_numbers_for_cars_with_colour White",
    "slot_number_for_registration_number KA-01-HH-3141",
    "slot_number_for_registration_number MH-04-AY-1111",
];

/// Output expected for [`SAMPLE_INPUT`].
#[allow(dead_code)]
pub const SAMPLE_OUTPUT: &str = "Created parking lot with 6 slots
Allocated slot number: 1
Allocated slot number: 2
Allocated slot number: 3
Allocated slot number: 4
Allocated slot number: 5
Allocated slot number: 6
Slot number 4 is free
Slot No.\tRegistration No\t\t\tColour
1\t\tKA-01-HH-1234\t\t\tWhite
2\t\tKA-01-HH-9999\t\t\tWhite
3\t\tKA-01-BB-0001\t\t\tBlack
5\t\tKA-01-HH-2701\t\t\tBlue
6\t\tKA-01-HH-3141\t\t\tBlack
Allocated slot number: 4
Sorry, parking lot is full
KA-01-HH-1234, KA-01-HH-9999, KA-01-P-333
1, 2, 4
6
Not Found
";
