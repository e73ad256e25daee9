//! Process execution utilities
//!
//! Spawns delegate programs straight from an argument vector; no shell is
//! involved at any point.

use crate::{
    error::{Result, SearchError},
    utils::quote,
};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, instrument, warn};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command with arguments, inheriting stdout/stderr
    #[instrument(skip(self, args))]
    pub fn run_command<S: AsRef<str>>(&self, command: &str, args: &[S]) -> Result<()> {
        self.run_command_with_stdio(command, args, Stdio::inherit(), Stdio::inherit())
    }

    /// Run a command with explicit stdout/stderr destinations
    #[instrument(skip(self, args, stdout, stderr))]
    pub fn run_command_with_stdio<S: AsRef<str>>(
        &self,
        command: &str,
        args: &[S],
        stdout: Stdio,
        stderr: Stdio,
    ) -> Result<()> {
        let argv: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        let cmd_str = quote::join(std::iter::once(command).chain(argv.iter().copied()));

        if self.debug {
            debug!("Running command: {}", cmd_str);
        }

        // Anything already echoed must land before the child's output.
        flush_before_spawn(&mut std::io::stdout(), command);

        let status = Command::new(command)
            .args(&argv)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .map_err(|e| SearchError::spawn(command, e))?;

        if !status.success() {
            let exit_code = status.code();
            debug!("Command failed with exit code: {:?}", exit_code);
            return Err(SearchError::delegate(cmd_str, exit_code));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}

/// Flush pending output; a failure is logged and the run goes ahead
fn flush_before_spawn<W: Write>(out: &mut W, command: &str) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to flush stdout before running {}: {}", command, e);
            false
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true);
        assert!(runner.debug);

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[test]
    fn test_run_simple_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command("true", &[] as &[&str]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command("sh", &["-c", "exit 3"]);

        if let Err(SearchError::Delegate { command, exit_code }) = result {
            assert_eq!(command, "sh -c 'exit 3'");
            assert_eq!(exit_code, Some(3));
        } else {
            panic!("Expected delegate error");
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_flush_failure_is_reported_not_fatal() {
        assert!(!flush_before_spawn(&mut BrokenPipe, "find"));
        assert!(flush_before_spawn(&mut Vec::<u8>::new(), "find"));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command("nonexistent_command_12345", &["x"]);
        assert!(matches!(result, Err(SearchError::Spawn { .. })));
    }

    #[test]
    fn test_arguments_are_not_shell_expanded() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("out.txt");
        let file = std::fs::File::create(&out).unwrap();

        let runner = ProcessRunner::new(false);
        runner
            .run_command_with_stdio("echo", &["$HOME", "*"], Stdio::from(file), Stdio::null())
            .unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "$HOME *\n");
    }
}
