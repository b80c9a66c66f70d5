//! Turns one line of user input into a validated [`Command`].

pub mod argument_map;
pub mod commands;
pub mod syntax;
pub mod tokenizer;
pub mod util;

use log::debug;

use crate::commands::{
    Command, DeleteNoteCommand, EditCommand, MarkCommand, ViewCommand, MESSAGE_HELP,
};
use crate::error::{FormatReason, ParseError};

pub use argument_map::ArgumentMap;
pub use commands::{parse_delete_note, parse_edit, parse_mark, parse_view};
pub use tokenizer::tokenize;

/// Splits `input` into its command word and arguments and hands the
/// arguments to that command's parser.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    if word.is_empty() {
        return Err(ParseError::usage(FormatReason::Shape, MESSAGE_HELP));
    }

    let result = match word {
        DeleteNoteCommand::COMMAND_WORD => parse_delete_note(args).map(Command::DeleteNote),
        MarkCommand::COMMAND_WORD => parse_mark(args).map(Command::Mark),
        ViewCommand::COMMAND_WORD => parse_view(args).map(Command::View),
        EditCommand::COMMAND_WORD => parse_edit(args).map(Command::Edit),
        _ => Err(ParseError::usage(
            FormatReason::UnknownCommand(word.to_string()),
            MESSAGE_HELP,
        )),
    };

    match &result {
        Ok(command) => debug!(
            "event=parse_command module=parser status=ok command={}",
            command.command_word()
        ),
        Err(err) => debug!(
            "event=parse_command module=parser status=error command={} kind={}",
            word,
            err.kind()
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Index;

    #[test]
    fn test_dispatch_by_command_word() {
        assert!(matches!(
            parse_command("deletenote 1 i/2"),
            Ok(Command::DeleteNote(_))
        ));
        assert!(matches!(
            parse_command("  mark w/1 pr/1,2 ab/3 "),
            Ok(Command::Mark(_))
        ));
        assert!(matches!(parse_command("view 4"), Ok(Command::View(_))));
        assert!(matches!(
            parse_command("edit 2 p/98765432 e/x@y.com"),
            Ok(Command::Edit(_))
        ));
    }

    #[test]
    fn test_arguments_reach_the_parser_unchanged() {
        match parse_command("view\t7") {
            Ok(Command::View(cmd)) => assert_eq!(cmd.person, Index::from_one_based(7).unwrap()),
            other => panic!("Expected view command, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_and_unknown_input() {
        assert_eq!(
            parse_command("   ").unwrap_err(),
            ParseError::usage(FormatReason::Shape, MESSAGE_HELP)
        );
        assert_eq!(
            parse_command("delete 1").unwrap_err(),
            ParseError::usage(FormatReason::UnknownCommand("delete".into()), MESSAGE_HELP)
        );
        // command words are case sensitive
        assert!(parse_command("VIEW 1").is_err());
    }

    #[test]
    fn test_command_usage_is_attached() {
        assert_eq!(
            parse_command("view").unwrap_err(),
            ParseError::usage(FormatReason::Shape, ViewCommand::MESSAGE_USAGE)
        );
    }
}
