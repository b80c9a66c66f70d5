//! Command-argument parsing for the TA toolkit.
//!
//! A typed line such as `edit 2 p/98765432 e/x@y.com` is split into its
//! command word and arguments, tokenized by prefix, validated field by field
//! and returned as an immutable [`commands::Command`] request. Parsing is
//! stateless; concurrent callers need no coordination.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod storage;

pub use commands::Command;
pub use error::{FormatReason, ParseError};
pub use parser::parse_command;
