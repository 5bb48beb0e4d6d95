//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Tokens(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "tokens" => Ok(TopLevelCommand::Tokens(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))
        .with_hint("run `cargo xtask help` for the command list")),
    }
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           tokens [--check] [--config <path>]\n\
                              Generate theme CSS variables and theme map from design tokens\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(Vec::new()), Ok(TopLevelCommand::Help));
    }

    #[test]
    fn tokens_forwards_remaining_args() {
        assert_eq!(
            parse(vec!["tokens".into(), "--check".into()]),
            Ok(TopLevelCommand::Tokens(vec!["--check".into()]))
        );
    }

    #[test]
    fn unknown_command_is_a_validation_error() {
        let err = parse(vec!["deploy".into()]).expect_err("unknown");
        assert_eq!(
            err.category,
            crate::runtime::error::XtaskErrorCategory::Validation
        );
    }
}
