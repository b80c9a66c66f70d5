//! One parser per command kind.
//!
//! Every parser runs its checks in the same order and stops at the first
//! failure: required parts present, single-valued prefixes not repeated,
//! preamble parsed, prefixed values parsed in declaration order, then any
//! rule spanning several fields.

use log::debug;

use crate::commands::{
    DeleteNoteCommand, EditCommand, EditPersonDescriptor, MarkCommand, ViewCommand,
};
use crate::error::{FormatReason, ParseError};
use crate::models::Index;
use crate::parser::argument_map::ArgumentMap;
use crate::parser::syntax::{
    Prefix, DELETE_NOTE_PREFIXES, EDIT_PREFIXES, MARK_PREFIXES, PREFIX_ABSENT, PREFIX_CLASS_GROUP,
    PREFIX_EMAIL, PREFIX_GITHUB, PREFIX_INDICES, PREFIX_NAME, PREFIX_PHONE, PREFIX_PRESENT,
    PREFIX_TELEGRAM, PREFIX_WEEK,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{
    parse_class_group, parse_email, parse_github, parse_index, parse_indices, parse_name,
    parse_phone, parse_telegram, parse_week,
};

const PERSON: &str = "person";
const NOTE: &str = "note";

/// `deletenote PERSON_INDEX i/NOTE_INDEX[,NOTE_INDEX]...`
pub fn parse_delete_note(args: &str) -> Result<DeleteNoteCommand, ParseError> {
    let usage = DeleteNoteCommand::MESSAGE_USAGE;
    let map = tokenize(args, &DELETE_NOTE_PREFIXES);

    let Some(notes_text) = map.last_value(PREFIX_INDICES) else {
        return Err(ParseError::usage(FormatReason::Shape, usage));
    };
    if map.preamble().is_empty() {
        return Err(ParseError::usage(FormatReason::Shape, usage));
    }

    map.reject_duplicates(&DELETE_NOTE_PREFIXES)?;

    let person = parse_index(map.preamble(), PERSON).map_err(|e| e.with_usage(usage))?;
    let notes = parse_indices(notes_text, NOTE).map_err(|e| e.with_usage(usage))?;

    Ok(DeleteNoteCommand { person, notes })
}

/// `mark w/WEEK [pr/INDEX[,INDEX]...] [ab/INDEX[,INDEX]...]`
///
/// The week is required, as is at least one of the two lists. A list prefix
/// that is given must carry at least one index.
pub fn parse_mark(args: &str) -> Result<MarkCommand, ParseError> {
    let usage = MarkCommand::MESSAGE_USAGE;
    let shape = || ParseError::usage(FormatReason::Shape, usage);
    let map = tokenize(args, &MARK_PREFIXES);

    let Some(week_text) = map.last_value(PREFIX_WEEK) else {
        return Err(shape());
    };
    let present_text = map.last_value(PREFIX_PRESENT);
    let absent_text = map.last_value(PREFIX_ABSENT);
    if !map.preamble().is_empty()
        || (present_text.is_none() && absent_text.is_none())
        || present_text.is_some_and(str::is_empty)
        || absent_text.is_some_and(str::is_empty)
    {
        return Err(shape());
    }

    map.reject_duplicates(&MARK_PREFIXES)?;

    let week = parse_week(week_text).map_err(|e| e.with_usage(usage))?;
    let present = parse_person_list(present_text).map_err(|e| e.with_usage(usage))?;
    let absent = parse_person_list(absent_text).map_err(|e| e.with_usage(usage))?;

    if present.is_empty() && absent.is_empty() {
        return Err(shape());
    }

    debug!(
        "event=parse_mark module=parser week={} present={} absent={}",
        week.number(),
        present.len(),
        absent.len()
    );
    Ok(MarkCommand {
        week,
        present,
        absent,
    })
}

fn parse_person_list(text: Option<&str>) -> Result<Vec<Index>, ParseError> {
    match text {
        Some(text) => parse_indices(text, PERSON),
        None => Ok(Vec::new()),
    }
}

/// `view PERSON_INDEX`
pub fn parse_view(args: &str) -> Result<ViewCommand, ParseError> {
    let usage = ViewCommand::MESSAGE_USAGE;
    let map = tokenize(args, &[]);
    if map.preamble().is_empty() {
        return Err(ParseError::usage(FormatReason::Shape, usage));
    }

    let person = parse_index(map.preamble(), PERSON).map_err(|e| e.with_usage(usage))?;
    Ok(ViewCommand { person })
}

/// `edit PERSON_INDEX [n/NAME] [p/PHONE] [e/EMAIL] [c/CLASS_GROUP] [tg/TELEGRAM] [gh/GITHUB]`
///
/// Fields are checked for repeats one at a time in declaration order, so
/// only the first repeated field is reported.
pub fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
    let usage = EditCommand::MESSAGE_USAGE;
    let map = tokenize(args, &EDIT_PREFIXES);
    if map.preamble().is_empty() {
        return Err(ParseError::usage(FormatReason::Shape, usage));
    }

    for prefix in EDIT_PREFIXES {
        map.reject_duplicates(&[prefix])?;
    }

    let person = parse_index(map.preamble(), PERSON).map_err(|e| e.with_usage(usage))?;

    let descriptor = EditPersonDescriptor {
        name: parse_optional(&map, PREFIX_NAME, parse_name)?,
        phone: parse_optional(&map, PREFIX_PHONE, parse_phone)?,
        email: parse_optional(&map, PREFIX_EMAIL, parse_email)?,
        class_group: parse_optional(&map, PREFIX_CLASS_GROUP, parse_class_group)?,
        telegram: parse_optional(&map, PREFIX_TELEGRAM, parse_telegram)?,
        github: parse_optional(&map, PREFIX_GITHUB, parse_github)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::usage(FormatReason::NothingToEdit, usage));
    }

    Ok(EditCommand { person, descriptor })
}

fn parse_optional<T>(
    map: &ArgumentMap,
    prefix: Prefix,
    parse: fn(Option<&str>) -> Result<T, ParseError>,
) -> Result<Option<T>, ParseError> {
    if map.is_present(prefix) {
        parse(map.last_value(prefix)).map(Some)
    } else {
        Ok(None)
    }
}
