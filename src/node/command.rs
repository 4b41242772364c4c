use std::{
    fmt::Display,
    io::{BufRead, BufReader, Read},
    sync::Arc,
    thread::{self, JoinHandle},
};

use tracing::{debug, error, info, warn};

use super::{
    errors::NodeCommandError,
    process::{Process, ProcessWrapper},
};

/// Receives one line of process output at a time, without the line terminator.
pub type LineConsumer = Arc<dyn Fn(&str) + Send + Sync>;

/// A Node.js invocation ready to be started.
///
/// Standard output and standard error are read on their own threads and
/// handed line by line to the output and error consumers.
pub struct NodeCommand {
    process_wrapper: Arc<dyn ProcessWrapper>,
    command_line: Vec<String>,
    output_consumer: LineConsumer,
    error_consumer: LineConsumer,
    process: Option<Box<dyn Process>>,
    readers: Vec<JoinHandle<()>>,
}

impl NodeCommand {
    pub(crate) fn new(
        process_wrapper: Arc<dyn ProcessWrapper>,
        executable: String,
        node_js_args: Vec<String>,
        script: Option<String>,
        script_args: Vec<String>,
        output_consumer: LineConsumer,
        error_consumer: LineConsumer,
    ) -> Self {
        let mut command_line = vec![executable];
        command_line.extend(node_js_args);
        command_line.extend(script);
        command_line.extend(script_args);

        NodeCommand {
            process_wrapper,
            command_line,
            output_consumer,
            error_consumer,
            process: None,
            readers: Vec::new(),
        }
    }

    pub fn command_line(&self) -> &[String] {
        &self.command_line
    }

    pub fn start(&mut self) -> Result<(), NodeCommandError> {
        info!(command = %self, "launching Node.js process");
        let mut process = self.process_wrapper.start(&self.command_line)?;

        if let Some(stdout) = process.take_stdout() {
            self.readers.push(stream_lines(stdout, Arc::clone(&self.output_consumer)));
        }
        if let Some(stderr) = process.take_stderr() {
            self.readers.push(stream_lines(stderr, Arc::clone(&self.error_consumer)));
        }

        self.process = Some(process);
        Ok(())
    }

    /// Waits for the process to exit and for its output to be consumed.
    pub fn wait_for(&mut self) -> Result<i32, NodeCommandError> {
        let Some(process) = self.process.as_mut() else {
            return Err(NodeCommandError::NotStarted);
        };

        let exit_code = process.wait()?;
        for reader in self.readers.drain(..) {
            if reader.join().is_err() {
                warn!("output reader thread panicked");
            }
        }

        debug!(exit_code, "Node.js process finished");
        Ok(exit_code)
    }

    pub fn destroy(&mut self) {
        if let Some(process) = self.process.as_mut() {
            if let Err(err) = process.kill() {
                debug!(%err, "failed to kill Node.js process");
            }
        }
    }
}

impl Display for NodeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_line.join(" "))
    }
}

fn stream_lines(stream: Box<dyn Read + Send>, consumer: LineConsumer) -> JoinHandle<()> {
    thread::spawn(move || {
        for line in BufReader::new(stream).lines() {
            match line {
                Ok(line) => consumer(&line),
                Err(err) => {
                    error!(%err, "failed to read Node.js output");
                    break;
                }
            }
        }
    })
}
