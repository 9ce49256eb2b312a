//! Abstraction over launching external commands.

use std::io::Read;
use std::process::{Child, Command, Stdio};

/// Handle to a started external command.
pub trait CommandHandle {
    /// Takes the command's standard output stream.
    ///
    /// The stream can only be taken once; subsequent calls return `None`.
    fn stdout(&mut self) -> Option<Box<dyn Read + Send>>;
    /// Closes the command's standard input stream.
    fn close_stdin(&mut self);
    /// Waits for the command to finish and returns its exit code.
    ///
    /// A command terminated without an exit code reports `-1`.
    fn wait(&mut self) -> Result<i32, String>;
}

/// Launches external commands.
///
/// Implementations may start operating system processes, or return
/// scripted output for tests.
pub trait CommandRunner {
    /// Starts a command and returns a handle to it.
    ///
    /// Fails only if the command cannot be started at all.
    fn start(&self, program: &str, args: &[&str]) -> Result<Box<dyn CommandHandle>, String>;
}

/// Runs commands as operating system processes.
pub struct OsCommandRunner;

impl CommandRunner for OsCommandRunner {
    fn start(&self, program: &str, args: &[&str]) -> Result<Box<dyn CommandHandle>, String> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|err| format!("Unable to start '{}': {}", program, err))?;

        Ok(Box::new(OsCommandHandle { child }))
    }
}

struct OsCommandHandle {
    child: Child,
}

impl CommandHandle for OsCommandHandle {
    fn stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        self.child
            .stdout
            .take()
            .map(|out| Box::new(out) as Box<dyn Read + Send>)
    }

    fn close_stdin(&mut self) {
        self.child.stdin.take();
    }

    fn wait(&mut self) -> Result<i32, String> {
        let status = self.child.wait().map_err(|err| err.to_string())?;
        Ok(status.code().unwrap_or(-1))
    }
}
