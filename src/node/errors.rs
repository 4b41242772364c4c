use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeCommandError {
    #[error("missing arguments for Node.js: expected runtime arguments, a script or script arguments")]
    MissingArguments,
    #[error("no script provided, but script arguments were found")]
    ScriptArgumentsWithoutScript,
    #[error("only Node.js v{required} or later is supported, got `{actual}`")]
    IncompatibleVersion { required: u32, actual: String },
    #[error("failed to parse Node.js version, expected `v<major>.<minor>.<patch>`, got `{actual}`")]
    UnparseableVersion { actual: String },
    #[error("`{executable} -v` exited with code {exit_code}, unable to determine the Node.js version")]
    VersionCheckFailed { executable: String, exit_code: i32 },
    #[error("Node.js process has not been started")]
    NotStarted,
    #[error("Node.js process failed: {0}")]
    Io(#[from] std::io::Error),
}
