//! Workspace maintenance commands (`cargo xtask`).
//!
//! The crate is a small CLI layer over a shared runtime. Command modules own their option parsing
//! and policy while [`runtime`] owns configuration loading, filesystem writes, and error reporting.

pub mod cli;
pub mod commands;
pub mod runtime;

use crate::cli::TopLevelCommand;
use crate::commands::tokens::TokensCommand;
use crate::runtime::context::CommandContext;
use crate::runtime::error::XtaskResult;

/// Shared command contract for top-level xtask command families.
///
/// Implementations should treat [`XtaskCommand::parse`] as a pure translation step from raw CLI
/// arguments into a typed options value and keep side effects in [`XtaskCommand::run`].
pub trait XtaskCommand {
    /// Typed options produced by CLI parsing for the command family.
    type Options;

    /// Parse command-line arguments into typed options.
    fn parse(args: &[String]) -> XtaskResult<Self::Options>;

    /// Execute the command family using the shared runtime context.
    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()>;
}

/// Executes the `xtask` binary using the current process arguments.
pub fn execute_from_env() -> XtaskResult<()> {
    let parsed = cli::parse(std::env::args().skip(1).collect())?;
    let ctx = CommandContext::new()?;

    match parsed {
        TopLevelCommand::Tokens(args) => TokensCommand::run(&ctx, TokensCommand::parse(&args)?),
        TopLevelCommand::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Converts an xtask result into a stable process exit code.
pub fn exit_code(result: XtaskResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.category.label());
            std::process::ExitCode::from(err.category.exit_status())
        }
    }
}
