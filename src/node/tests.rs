use std::{
    collections::HashMap,
    fs,
    io::{self, Cursor, Read},
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use super::{
    builder::{check_version, NodeCommandBuilder},
    config::{Configuration, EnvConfiguration},
    errors::NodeCommandError,
    process::{Process, ProcessWrapper, SystemProcessWrapper},
};

struct FakeProcess {
    stdout: Option<String>,
    stderr: Option<String>,
    exit_code: i32,
    killed: Arc<AtomicBool>,
}

impl Process for FakeProcess {
    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        self.stdout.take().map(|out| Box::new(Cursor::new(out.into_bytes())) as Box<dyn Read + Send>)
    }

    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        self.stderr.take().map(|err| Box::new(Cursor::new(err.into_bytes())) as Box<dyn Read + Send>)
    }

    fn wait(&mut self) -> io::Result<i32> {
        Ok(self.exit_code)
    }

    fn kill(&mut self) -> io::Result<()> {
        self.killed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Records every command line it is asked to start and replays canned output.
#[derive(Clone, Default)]
struct FakeProcessWrapper {
    stdout: String,
    stderr: String,
    exit_code: i32,
    started: Arc<Mutex<Vec<Vec<String>>>>,
    killed: Arc<AtomicBool>,
}

impl FakeProcessWrapper {
    fn printing(stdout: &str) -> Self {
        FakeProcessWrapper {
            stdout: stdout.to_string(),
            ..Default::default()
        }
    }

    fn started(&self) -> Vec<Vec<String>> {
        self.started.lock().unwrap().clone()
    }
}

impl ProcessWrapper for FakeProcessWrapper {
    fn start(&self, command_line: &[String]) -> io::Result<Box<dyn Process>> {
        self.started.lock().unwrap().push(command_line.to_vec());
        Ok(Box::new(FakeProcess {
            stdout: Some(self.stdout.clone()),
            stderr: Some(self.stderr.clone()),
            exit_code: self.exit_code,
            killed: Arc::clone(&self.killed),
        }))
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn collector() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    (lines, move |line: &str| sink.lock().unwrap().push(line.to_string()))
}

#[test]
fn test_command_line() {
    let command = NodeCommandBuilder::new(FakeProcessWrapper::default())
        .max_old_space_size(2048)
        .node_js_args(["--no-warnings"])
        .script("server.js")
        .script_args(["--port", "0"])
        .build()
        .unwrap();

    assert_eq!(
        command.command_line(),
        ["node", "--max-old-space-size=2048", "--no-warnings", "server.js", "--port", "0"]
    );
    assert_eq!(command.to_string(), "node --max-old-space-size=2048 --no-warnings server.js --port 0");
}

#[test]
fn test_runtime_args_alone_are_enough() {
    let command = NodeCommandBuilder::new(FakeProcessWrapper::default())
        .node_js_args(["-e", "1"])
        .build()
        .unwrap();

    assert_eq!(command.command_line(), ["node", "-e", "1"]);
}

#[test]
fn test_missing_arguments() {
    let wrapper = FakeProcessWrapper::printing("v10.0.0");
    let result = NodeCommandBuilder::new(wrapper.clone()).min_node_version(8).build();

    assert!(matches!(result, Err(NodeCommandError::MissingArguments)));
    // Validation happens before the version check
    assert!(wrapper.started().is_empty());
}

#[test]
fn test_script_arguments_without_script() {
    let result = NodeCommandBuilder::new(FakeProcessWrapper::default())
        .script_args(["a"])
        .build();

    assert!(matches!(result, Err(NodeCommandError::ScriptArgumentsWithoutScript)));
}

#[test]
fn test_check_version() {
    assert!(check_version("v10.1.0", 8).is_ok());
    assert!(check_version("8.0.0", 8).is_ok());
    assert!(check_version("v12.22.9-nightly", 12).is_ok());

    assert!(matches!(
        check_version("v6.11.5", 8),
        Err(NodeCommandError::IncompatibleVersion { required: 8, ref actual }) if actual == "v6.11.5"
    ));
    assert!(matches!(check_version("v10.1", 8), Err(NodeCommandError::UnparseableVersion { .. })));
    assert!(matches!(check_version("node v10.1.0", 8), Err(NodeCommandError::UnparseableVersion { .. })));
    assert!(matches!(check_version("", 8), Err(NodeCommandError::UnparseableVersion { .. })));
}

#[test]
fn test_version_query() {
    let wrapper = FakeProcessWrapper::printing("v10.1.0\n");
    let command = NodeCommandBuilder::new(wrapper.clone())
        .min_node_version(8)
        .script("a.js")
        .build()
        .unwrap();

    assert_eq!(command.command_line(), ["node", "a.js"]);
    assert_eq!(wrapper.started(), vec![vec![String::from("node"), String::from("-v")]]);
}

#[test]
fn test_version_check_rejects_old_node() {
    let wrapper = FakeProcessWrapper::printing("v6.1.0\n");
    let result = NodeCommandBuilder::new(wrapper).min_node_version(8).script("a.js").build();

    match result {
        Err(NodeCommandError::IncompatibleVersion { required, actual }) => {
            assert_eq!(required, 8);
            assert_eq!(actual, "v6.1.0");
        }
        _ => panic!("expected an incompatible version"),
    }
}

#[test]
fn test_version_check_failure() {
    let wrapper = FakeProcessWrapper {
        exit_code: 1,
        ..Default::default()
    };
    let result = NodeCommandBuilder::new(wrapper).min_node_version(8).script("a.js").build();

    assert!(matches!(
        result,
        Err(NodeCommandError::VersionCheckFailed { exit_code: 1, ref executable }) if executable == "node"
    ));
}

#[test]
fn test_executable_from_configuration() {
    let dir = tempfile::TempDir::new().unwrap();
    let executable = dir.path().join("node-custom");
    fs::write(&executable, "").unwrap();
    let missing = dir.path().join("missing");

    let mut configuration = HashMap::new();
    configuration.insert(String::from("sonar.nodejs.executable"), missing.to_string_lossy().to_string());
    configuration.insert(String::from("sonar.typescript.node"), executable.to_string_lossy().to_string());
    configuration.insert(String::from("sonar.css.node"), String::from("/somewhere/else"));

    let command = NodeCommandBuilder::new(FakeProcessWrapper::default())
        .configuration(configuration)
        .script("a.js")
        .build()
        .unwrap();

    assert_eq!(command.command_line()[0], executable.to_string_lossy());
}

#[test]
fn test_executable_falls_back_to_default() {
    let mut configuration = HashMap::new();
    configuration.insert(String::from("sonar.nodejs.executable"), String::from("/does/not/exist/node"));

    let command = NodeCommandBuilder::new(FakeProcessWrapper::default())
        .configuration(configuration)
        .script("a.js")
        .build()
        .unwrap();

    assert_eq!(command.command_line()[0], "node");
}

#[test]
fn test_executable_keys_carry_sonar_prefix() {
    let dir = tempfile::TempDir::new().unwrap();
    let executable = dir.path().join("node-custom");
    fs::write(&executable, "").unwrap();

    let mut unprefixed = HashMap::new();
    unprefixed.insert(String::from("nodejs.executable"), executable.to_string_lossy().to_string());
    let command = NodeCommandBuilder::new(FakeProcessWrapper::default())
        .configuration(unprefixed)
        .script("a.js")
        .build()
        .unwrap();
    assert_eq!(command.command_line()[0], "node");

    let mut prefixed = HashMap::new();
    prefixed.insert(String::from("sonar.css.node"), executable.to_string_lossy().to_string());
    let command = NodeCommandBuilder::new(FakeProcessWrapper::default())
        .configuration(prefixed)
        .script("a.js")
        .build()
        .unwrap();
    assert_eq!(command.command_line()[0], executable.to_string_lossy());
}

#[test]
fn test_env_configuration() {
    let configuration = EnvConfiguration::with_prefix("JSKINDS_NODE_TESTS");
    assert_eq!(
        configuration.variable_name("sonar.nodejs.executable"),
        "JSKINDS_NODE_TESTS_SONAR_NODEJS_EXECUTABLE"
    );
    assert_eq!(EnvConfiguration::default().variable_name("sonar.css.node"), "JSKINDS_SONAR_CSS_NODE");

    std::env::set_var("JSKINDS_NODE_TESTS_SONAR_NODEJS_EXECUTABLE", "/opt/node/bin/node");
    assert_eq!(configuration.get("sonar.nodejs.executable").as_deref(), Some("/opt/node/bin/node"));
    assert_eq!(configuration.get("sonar.typescript.node"), None);
}

#[test]
fn test_output_is_streamed_to_consumers() {
    let wrapper = FakeProcessWrapper {
        stdout: String::from("first\nsecond\n"),
        stderr: String::from("warning"),
        exit_code: 3,
        ..Default::default()
    };
    let (output, output_consumer) = collector();
    let (errors, error_consumer) = collector();

    let mut command = NodeCommandBuilder::new(wrapper)
        .script("a.js")
        .output_consumer(output_consumer)
        .error_consumer(error_consumer)
        .build()
        .unwrap();

    command.start().unwrap();
    assert_eq!(command.wait_for().unwrap(), 3);

    assert_eq!(*output.lock().unwrap(), vec!["first", "second"]);
    assert_eq!(*errors.lock().unwrap(), vec!["warning"]);
}

#[test]
fn test_wait_before_start() {
    let mut command = NodeCommandBuilder::new(FakeProcessWrapper::default())
        .script("a.js")
        .build()
        .unwrap();

    assert!(matches!(command.wait_for(), Err(NodeCommandError::NotStarted)));
}

#[test]
fn test_destroy_kills_process() {
    let wrapper = FakeProcessWrapper::default();
    let mut command = NodeCommandBuilder::new(wrapper.clone()).script("a.js").build().unwrap();

    command.destroy();
    assert!(!wrapper.killed.load(Ordering::SeqCst));

    command.start().unwrap();
    command.destroy();
    assert!(wrapper.killed.load(Ordering::SeqCst));
}

#[test]
fn test_system_process_wrapper_reports_spawn_failure() {
    let wrapper = SystemProcessWrapper;

    assert!(wrapper.start(&[String::from("jskinds-no-such-executable")]).is_err());
    assert!(wrapper.start(&[]).is_err());
    assert!(!wrapper.file_exists(Path::new("/jskinds/no/such/file")));
}
