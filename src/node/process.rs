use std::{
    io::{self, Read},
    path::Path,
    process::{Child, Command, Stdio},
};

/// A started child process.
pub trait Process: Send {
    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>>;
    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>>;
    /// Blocks until the process exits and returns its exit code.
    fn wait(&mut self) -> io::Result<i32>;
    fn kill(&mut self) -> io::Result<()>;
}

/// Starts processes and answers file queries on behalf of the node command.
pub trait ProcessWrapper: Send + Sync {
    fn start(&self, command_line: &[String]) -> io::Result<Box<dyn Process>>;
    fn file_exists(&self, path: &Path) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessWrapper;

impl ProcessWrapper for SystemProcessWrapper {
    fn start(&self, command_line: &[String]) -> io::Result<Box<dyn Process>> {
        let Some((program, args)) = command_line.split_first() else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command line"));
        };

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        Ok(Box::new(SystemProcess { child }))
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

struct SystemProcess {
    child: Child,
}

impl Process for SystemProcess {
    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        self.child.stdout.take().map(|stdout| Box::new(stdout) as Box<dyn Read + Send>)
    }

    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        self.child.stderr.take().map(|stderr| Box::new(stderr) as Box<dyn Read + Send>)
    }

    fn wait(&mut self) -> io::Result<i32> {
        let status = self.child.wait()?;
        // Killed by a signal
        Ok(status.code().unwrap_or(-1))
    }

    fn kill(&mut self) -> io::Result<()> {
        self.child.kill()
    }
}
