use anyhow::Result;

pub use args::{Arguments, Command};

pub mod args;
mod commands;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<()> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(());
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(())
}
