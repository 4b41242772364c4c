pub mod builder;
pub mod command;
pub mod config;
pub mod errors;
pub mod process;

#[cfg(test)]
mod tests;

pub use builder::{check_version, NodeCommandBuilder};
pub use command::{LineConsumer, NodeCommand};
pub use config::{Configuration, EnvConfiguration};
pub use errors::NodeCommandError;
pub use process::{Process, ProcessWrapper, SystemProcessWrapper};
