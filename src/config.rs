use crate::cli::Cli;

/// How read results are written to stdout.
///
/// `Table` only applies to the `states`, `services` and `events` lists;
/// every other result, and service call outcomes, stay as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

/// Per-invocation settings taken from the global flags.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub verbose: bool,
}

impl RuntimeConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            output_mode: if cli.table {
                OutputMode::Table
            } else {
                OutputMode::Json
            },
            verbose: cli.verbose,
        }
    }
}
