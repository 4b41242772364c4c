use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, error, info, warn};

use super::{
    command::{LineConsumer, NodeCommand},
    config::Configuration,
    errors::NodeCommandError,
    process::{ProcessWrapper, SystemProcessWrapper},
};

const NODE_EXECUTABLE_DEFAULT: &str = "node";

// Checked in order, the first naming an existing file wins
const NODE_EXECUTABLE_PROPERTIES: [&str; 3] = ["sonar.nodejs.executable", "sonar.typescript.node", "sonar.css.node"];

lazy_static! {
    static ref NODEJS_VERSION_PATTERN: Regex =
        Regex::new(r"^v?(\d+)\.\d+\.\d+").expect("version pattern must compile");
}

/// Fluent builder for a [`NodeCommand`].
///
/// ```ignore
/// let mut command = NodeCommandBuilder::default()
///     .min_node_version(8)
///     .max_old_space_size(2048)
///     .script("server.js")
///     .script_args(["--port", "0"])
///     .build()?;
/// command.start()?;
/// ```
pub struct NodeCommandBuilder {
    process_wrapper: Arc<dyn ProcessWrapper>,
    min_node_version: Option<u32>,
    configuration: Option<Box<dyn Configuration>>,
    node_js_args: Vec<String>,
    script: Option<String>,
    script_args: Vec<String>,
    output_consumer: LineConsumer,
    error_consumer: LineConsumer,
}

impl NodeCommandBuilder {
    pub fn new(process_wrapper: impl ProcessWrapper + 'static) -> Self {
        NodeCommandBuilder {
            process_wrapper: Arc::new(process_wrapper),
            min_node_version: None,
            configuration: None,
            node_js_args: Vec::new(),
            script: None,
            script_args: Vec::new(),
            output_consumer: Arc::new(|line: &str| info!("{}", line)),
            error_consumer: Arc::new(|line: &str| error!("{}", line)),
        }
    }

    pub fn min_node_version(mut self, version: u32) -> Self {
        self.min_node_version = Some(version);
        self
    }

    pub fn configuration(mut self, configuration: impl Configuration + 'static) -> Self {
        self.configuration = Some(Box::new(configuration));
        self
    }

    pub fn max_old_space_size(self, megabytes: u32) -> Self {
        self.node_js_args([format!("--max-old-space-size={}", megabytes)])
    }

    pub fn node_js_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_js_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn script_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn output_consumer(mut self, consumer: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.output_consumer = Arc::new(consumer);
        self
    }

    pub fn error_consumer(mut self, consumer: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.error_consumer = Arc::new(consumer);
        self
    }

    /// Validates the arguments, checks the Node.js version when a minimum is
    /// set, then returns a command ready to start.
    pub fn build(self) -> Result<NodeCommand, NodeCommandError> {
        if self.node_js_args.is_empty() && self.script.is_none() && self.script_args.is_empty() {
            return Err(NodeCommandError::MissingArguments);
        }
        if self.script.is_none() && !self.script_args.is_empty() {
            return Err(NodeCommandError::ScriptArgumentsWithoutScript);
        }

        let executable = self.node_executable();

        if let Some(required) = self.min_node_version {
            debug!(required, "checking Node.js version");
            let actual = self.query_version(&executable)?;
            check_version(&actual, required)?;
        }

        Ok(NodeCommand::new(
            self.process_wrapper,
            executable,
            self.node_js_args,
            self.script,
            self.script_args,
            self.output_consumer,
            self.error_consumer,
        ))
    }

    fn node_executable(&self) -> String {
        let Some(configuration) = &self.configuration else {
            return NODE_EXECUTABLE_DEFAULT.to_string();
        };

        for property in NODE_EXECUTABLE_PROPERTIES {
            let Some(executable) = configuration.get(property) else {
                continue;
            };

            if self.process_wrapper.file_exists(Path::new(&executable)) {
                info!(executable = %executable, property, "using Node.js executable from configuration");
                return executable;
            }
            warn!(executable = %executable, property, "configured Node.js executable does not exist");
        }

        NODE_EXECUTABLE_DEFAULT.to_string()
    }

    fn query_version(&self, executable: &str) -> Result<String, NodeCommandError> {
        let output = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&output);

        let mut version_command = NodeCommand::new(
            Arc::clone(&self.process_wrapper),
            executable.to_string(),
            vec![String::from("-v")],
            None,
            Vec::new(),
            Arc::new(move |line: &str| {
                if let Ok(mut output) = sink.lock() {
                    output.push_str(line);
                }
            }),
            Arc::new(|line: &str| error!("{}", line)),
        );

        version_command.start()?;
        let exit_code = version_command.wait_for()?;
        if exit_code != 0 {
            return Err(NodeCommandError::VersionCheckFailed {
                executable: executable.to_string(),
                exit_code,
            });
        }

        let version = output.lock().map(|output| output.trim().to_string()).unwrap_or_default();
        Ok(version)
    }
}

impl Default for NodeCommandBuilder {
    fn default() -> Self {
        NodeCommandBuilder::new(SystemProcessWrapper)
    }
}

/// Checks that `actual` (as printed by `node -v`) has a major version of at
/// least `required`.
pub fn check_version(actual: &str, required: u32) -> Result<(), NodeCommandError> {
    let unparseable = || NodeCommandError::UnparseableVersion {
        actual: actual.to_string(),
    };

    let Some(captures) = NODEJS_VERSION_PATTERN.captures(actual) else {
        error!(actual, "failed to parse Node.js version");
        return Err(unparseable());
    };
    let major: u32 = captures[1].parse().map_err(|_| unparseable())?;

    if major < required {
        error!(required, actual, "incompatible Node.js version");
        return Err(NodeCommandError::IncompatibleVersion {
            required,
            actual: actual.to_string(),
        });
    }

    debug!(version = actual, "using Node.js");
    Ok(())
}
