//! Failures produced while turning an argument string into a command request.

use crate::models::{Index, Week};
use crate::parser::syntax::Prefix;

/// Why an argument string did not have the shape a command expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatReason {
    #[error("the arguments do not match the expected form")]
    Shape,

    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),

    #[error("expected a comma-separated list of indices")]
    EmptyIndexList,

    #[error("the index list '{0}' contains an empty entry")]
    EmptyIndexSegment(String),

    #[error("'{0}' is not a valid week. {msg}", msg = Week::MESSAGE_CONSTRAINTS)]
    Week(String),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// A parse failure. Exactly one is reported per input: the first one found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not match the command's shape. Value parsers leave
    /// `usage` empty; command parsers fill in their own usage text.
    #[error("{}", render_format(.reason, .usage))]
    Format {
        reason: FormatReason,
        usage: Option<&'static str>,
    },

    /// Numeric text that cannot be a one-based index of the given kind.
    #[error(
        "Index {value} is not a valid {kind} index; it must be a positive whole number no larger than {max}.",
        max = Index::MAX_ONE_BASED
    )]
    Range { kind: &'static str, value: String },

    /// A single-valued prefix appeared more than once.
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        join_prefixes(.prefixes)
    )]
    DuplicatePrefix { prefixes: Vec<Prefix> },

    /// A supplied value broke the field's own rule.
    #[error("{message}")]
    FieldConstraint {
        field: &'static str,
        message: &'static str,
    },

    #[error("No value was supplied for the {field} field.")]
    NullInput { field: &'static str },
}

impl ParseError {
    pub fn format(reason: FormatReason) -> Self {
        ParseError::Format {
            reason,
            usage: None,
        }
    }

    pub fn usage(reason: FormatReason, usage: &'static str) -> Self {
        ParseError::Format {
            reason,
            usage: Some(usage),
        }
    }

    /// Attaches a command's usage text to a format error that has none yet.
    /// Every other kind of error passes through untouched.
    pub fn with_usage(self, usage: &'static str) -> Self {
        match self {
            ParseError::Format {
                reason,
                usage: None,
            } => ParseError::usage(reason, usage),
            other => other,
        }
    }

    /// Short name of the error kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Format { .. } => "format",
            ParseError::Range { .. } => "range",
            ParseError::DuplicatePrefix { .. } => "duplicate_prefix",
            ParseError::FieldConstraint { .. } => "field_constraint",
            ParseError::NullInput { .. } => "null_input",
        }
    }
}

fn render_format(reason: &FormatReason, usage: &Option<&'static str>) -> String {
    match usage {
        Some(usage) => format!("Invalid command format! {}\n{}", reason, usage),
        None => reason.to_string(),
    }
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_EMAIL, PREFIX_PHONE};

    #[test]
    fn test_with_usage_only_touches_bare_format_errors() {
        let err = ParseError::format(FormatReason::Shape).with_usage("view INDEX");
        assert_eq!(err, ParseError::usage(FormatReason::Shape, "view INDEX"));

        let err = ParseError::usage(FormatReason::Shape, "first").with_usage("second");
        assert_eq!(err, ParseError::usage(FormatReason::Shape, "first"));

        let range = ParseError::Range {
            kind: "person",
            value: "0".into(),
        };
        assert_eq!(range.clone().with_usage("view INDEX"), range);
    }

    #[test]
    fn test_messages() {
        let err = ParseError::usage(FormatReason::Shape, "view INDEX");
        assert_eq!(
            err.to_string(),
            "Invalid command format! the arguments do not match the expected form\nview INDEX"
        );

        let err = ParseError::Range {
            kind: "note",
            value: "0".into(),
        };
        assert!(err.to_string().starts_with("Index 0 is not a valid note index"));

        let err = ParseError::DuplicatePrefix {
            prefixes: vec![PREFIX_PHONE, PREFIX_EMAIL],
        };
        assert!(err.to_string().ends_with("p/ e/"));
    }
}
