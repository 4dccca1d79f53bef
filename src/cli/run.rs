use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{generate::generate, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler selected by `args`.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
