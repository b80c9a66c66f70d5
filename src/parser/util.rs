//! Value parsers shared by every command parser.
//!
//! Each takes one raw token, trims it, and either returns the domain value
//! or the error describing why the token was rejected. Format errors are
//! returned without usage text; the calling command parser attaches its own.

use crate::error::{FormatReason, ParseError};
use crate::models::{ClassGroup, Email, Github, Index, Name, Phone, Telegram, Week};

/// Parses a one-based index.
///
/// Text that is not an integer literal is a format error. An integer that
/// is zero, negative or too large is a [`ParseError::Range`] naming `kind`.
pub fn parse_index(text: &str, kind: &'static str) -> Result<Index, ParseError> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::format(FormatReason::NotAnInteger(
            trimmed.to_string(),
        )));
    }

    let out_of_range = || ParseError::Range {
        kind,
        value: trimmed.to_string(),
    };

    if negative {
        return Err(out_of_range());
    }

    // Only overflow can fail here; the digits were checked above.
    let value: usize = digits.parse().map_err(|_| out_of_range())?;
    Index::from_one_based(value).ok_or_else(out_of_range)
}

/// Parses a comma-separated list of one-based indices, keeping input order
/// and any repeats.
///
/// One trailing comma is ignored. Any other empty entry, including a leading
/// one, is a format error. Entries are checked left to right and the first
/// failure is returned.
pub fn parse_indices(text: &str, kind: &'static str) -> Result<Vec<Index>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::format(FormatReason::EmptyIndexList));
    }

    let mut segments: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }

    let mut indices = Vec::with_capacity(segments.len());
    for segment in segments {
        if segment.is_empty() {
            return Err(ParseError::format(FormatReason::EmptyIndexSegment(
                trimmed.to_string(),
            )));
        }
        indices.push(parse_index(segment, kind)?);
    }
    Ok(indices)
}

/// Parses a week number. Anything that is not a week in range is a format
/// error carrying the week constraints.
pub fn parse_week(text: &str) -> Result<Week, ParseError> {
    let trimmed = text.trim();
    let invalid = || ParseError::format(FormatReason::Week(trimmed.to_string()));

    let index = parse_index(trimmed, "week").map_err(|_| invalid())?;
    Week::new(index).ok_or_else(invalid)
}

fn parse_field<T>(
    value: Option<&str>,
    field: &'static str,
    message: &'static str,
    build: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ParseError> {
    let value = value.ok_or(ParseError::NullInput { field })?;
    build(value.trim()).ok_or(ParseError::FieldConstraint { field, message })
}

pub fn parse_name(value: Option<&str>) -> Result<Name, ParseError> {
    parse_field(value, Name::LABEL, Name::MESSAGE_CONSTRAINTS, Name::new)
}

pub fn parse_phone(value: Option<&str>) -> Result<Phone, ParseError> {
    parse_field(value, Phone::LABEL, Phone::MESSAGE_CONSTRAINTS, Phone::new)
}

pub fn parse_email(value: Option<&str>) -> Result<Email, ParseError> {
    parse_field(value, Email::LABEL, Email::MESSAGE_CONSTRAINTS, Email::new)
}

pub fn parse_class_group(value: Option<&str>) -> Result<ClassGroup, ParseError> {
    parse_field(
        value,
        ClassGroup::LABEL,
        ClassGroup::MESSAGE_CONSTRAINTS,
        ClassGroup::new,
    )
}

pub fn parse_telegram(value: Option<&str>) -> Result<Telegram, ParseError> {
    parse_field(
        value,
        Telegram::LABEL,
        Telegram::MESSAGE_CONSTRAINTS,
        Telegram::new,
    )
}

pub fn parse_github(value: Option<&str>) -> Result<Github, ParseError> {
    parse_field(value, Github::LABEL, Github::MESSAGE_CONSTRAINTS, Github::new)
}
