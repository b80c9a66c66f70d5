//! Validated command requests handed to the execution layer.
//!
//! These are plain data. Nothing here reads or changes stored records.

use crate::models::{ClassGroup, Email, Github, Index, Name, Phone, Telegram, Week};
use serde::Serialize;
use std::fmt;

/// General help shown when the command word itself is missing or unknown.
pub const MESSAGE_HELP: &str = "Commands: deletenote, edit, mark, view\n\
    Type a command word followed by its arguments, e.g. edit 2 p/98765432 e/x@y.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    DeleteNote(DeleteNoteCommand),
    Mark(MarkCommand),
    View(ViewCommand),
    Edit(EditCommand),
}

impl Command {
    pub fn command_word(&self) -> &'static str {
        match self {
            Command::DeleteNote(_) => DeleteNoteCommand::COMMAND_WORD,
            Command::Mark(_) => MarkCommand::COMMAND_WORD,
            Command::View(_) => ViewCommand::COMMAND_WORD,
            Command::Edit(_) => EditCommand::COMMAND_WORD,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::DeleteNote(cmd) => write!(
                f,
                "Delete notes {} of person {}",
                join_indices(&cmd.notes),
                cmd.person
            ),
            Command::Mark(cmd) => write!(
                f,
                "Mark {}: present [{}], absent [{}]",
                cmd.week,
                join_indices(&cmd.present),
                join_indices(&cmd.absent)
            ),
            Command::View(cmd) => write!(f, "View person {}", cmd.person),
            Command::Edit(cmd) => write!(f, "Edit person {}: {}", cmd.person, cmd.descriptor),
        }
    }
}

fn join_indices(indices: &[Index]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteNoteCommand {
    pub person: Index,
    pub notes: Vec<Index>,
}

impl DeleteNoteCommand {
    pub const COMMAND_WORD: &'static str = "deletenote";
    pub const MESSAGE_USAGE: &'static str = "deletenote: Deletes notes from the person identified by \
        the index number used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer) i/NOTE_INDEX[,NOTE_INDEX]...\n\
        Example: deletenote 1 i/1,3";
}

/// Attendance for one week. Either list may be empty, not both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkCommand {
    pub week: Week,
    pub present: Vec<Index>,
    pub absent: Vec<Index>,
}

impl MarkCommand {
    pub const COMMAND_WORD: &'static str = "mark";
    pub const MESSAGE_USAGE: &'static str = "mark: Marks the attendance of the persons identified by \
        the index numbers used in the displayed person list.\n\
        Parameters: w/WEEK [pr/INDEX[,INDEX]...] [ab/INDEX[,INDEX]...] (at least one of pr/ or ab/)\n\
        Example: mark w/1 pr/1,2 ab/3";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewCommand {
    pub person: Index,
}

impl ViewCommand {
    pub const COMMAND_WORD: &'static str = "view";
    pub const MESSAGE_USAGE: &'static str = "view: Shows the details of the person identified by \
        the index number used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: view 1";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditCommand {
    pub person: Index,
    pub descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified by \
        the index number used in the displayed person list. Existing values will be overwritten \
        by the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] \
        [c/CLASS_GROUP] [tg/TELEGRAM] [gh/GITHUB]\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";
}

/// The fields an edit changes. `None` means the field is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditPersonDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_group: Option<ClassGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<Telegram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<Github>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.class_group.is_some()
            || self.telegram.is_some()
            || self.github.is_some()
    }
}

impl fmt::Display for EditPersonDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<String> = Vec::new();
        if let Some(name) = &self.name {
            fields.push(format!("name={}", name));
        }
        if let Some(phone) = &self.phone {
            fields.push(format!("phone={}", phone));
        }
        if let Some(email) = &self.email {
            fields.push(format!("email={}", email));
        }
        if let Some(class_group) = &self.class_group {
            fields.push(format!("class_group={}", class_group));
        }
        if let Some(telegram) = &self.telegram {
            fields.push(format!("telegram={}", telegram));
        }
        if let Some(github) = &self.github {
            fields.push(format!("github={}", github));
        }
        write!(f, "{}", fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(n: usize) -> Index {
        Index::from_one_based(n).unwrap()
    }

    #[test]
    fn test_descriptor_edited_flag() {
        let mut descriptor = EditPersonDescriptor::default();
        assert!(!descriptor.is_any_field_edited());
        descriptor.github = Github::new("rachel");
        assert!(descriptor.is_any_field_edited());
    }

    #[test]
    fn test_command_display() {
        let cmd = Command::Mark(MarkCommand {
            week: Week::new(index(1)).unwrap(),
            present: vec![index(1), index(2)],
            absent: vec![index(3)],
        });
        assert_eq!(cmd.to_string(), "Mark week 1: present [1, 2], absent [3]");
        assert_eq!(cmd.command_word(), "mark");

        let cmd = Command::Edit(EditCommand {
            person: index(1),
            descriptor: EditPersonDescriptor {
                phone: Phone::new("91234567"),
                ..Default::default()
            },
        });
        assert_eq!(cmd.to_string(), "Edit person 1: phone=91234567");
    }

    #[test]
    fn test_command_json() {
        let cmd = Command::DeleteNote(DeleteNoteCommand {
            person: index(2),
            notes: vec![index(1), index(3)],
        });
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "command": "deletenote", "person": 2, "notes": [1, 3] })
        );
    }
}
