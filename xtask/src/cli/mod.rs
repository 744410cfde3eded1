//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Connect(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some((cmd, rest)) = args.split_first() else {
        return Ok(TopLevelCommand::Help);
    };

    match cmd.as_str() {
        "connect" => Ok(TopLevelCommand::Connect(rest.to_vec())),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))),
    }
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           connect [check|export|resolve]  Design-tool mapping checks, exports, and previews\n\
           help                            Show this message\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_print_help() {
        assert_eq!(parse(Vec::new()).expect("parse"), TopLevelCommand::Help);
    }

    #[test]
    fn connect_forwards_remaining_args() {
        assert_eq!(
            parse(vec!["connect".into(), "export".into(), "--strict".into()]).expect("parse"),
            TopLevelCommand::Connect(vec!["export".into(), "--strict".into()])
        );
        assert!(parse(vec!["deploy".into()]).is_err());
    }
}
