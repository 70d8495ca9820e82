/*!
Error types for registration and parsing. Parse errors borrow from the
[`Parser`][crate::Parser] that produced them, so they can point at the exact
token that caused the problem.
*/

use core::fmt;

use joinery::JoinableIterator;

use crate::{Tags, entry::FlagOpt};

/// A flag or option as the user actually typed it: `--long` or `-s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    Long(&'a str),
    Short(char),
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Tag::Long(long) => write!(f, "--{long}"),
            Tag::Short(short) => write!(f, "-{short}"),
        }
    }
}

/**
Errors that can occur during [`Parser::parse`][crate::Parser::parse]. Each
of these is fatal: parsing stops at the first one, and the command line has
to be corrected and re-run.
*/
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError<'a> {
    /// A lone `-` or `--`, which don't name anything
    #[error("unrecognised option/flag: {token}")]
    LoneDash { token: &'a str },

    /// A `--long` or `-s` that doesn't name any registered flag or option.
    /// Positional arguments can't be addressed by name, so naming one of
    /// them ends up here too.
    #[error("unrecognised option/flag: {tag}")]
    Unrecognised { tag: Tag<'a> },

    /// An option was the last thing on the command line, so there was no
    /// value for it
    #[error("no value for option: {tag}")]
    MissingValue { tag: Tag<'a> },

    /// A positional value showed up after every argument was already filled
    #[error("value {value:?} has no matching argument")]
    UnmatchedPositional { value: &'a str },

    /// The command line ended before every argument was filled. Contains
    /// the long names of the arguments that are missing.
    #[error("too few arguments; missing {}", .missing.iter().join_with(", "))]
    TooFewArguments { missing: Vec<&'a str> },
}

/**
A registration was rejected because its short name, or its non-empty long
name, was already taken. The rejected entry is returned intact.
*/
#[derive(Debug, Clone, thiserror::Error)]
#[error("flag/option/argument with the same name/long name as \"{}\" already exists", tags(.entry))]
pub struct DuplicateError {
    entry: FlagOpt,
}

impl DuplicateError {
    pub(crate) fn new(entry: FlagOpt) -> Self {
        Self { entry }
    }

    /// The entry that was rejected
    #[must_use]
    pub fn entry(&self) -> &FlagOpt {
        &self.entry
    }

    #[must_use]
    pub fn into_entry(self) -> FlagOpt {
        self.entry
    }
}

fn tags(entry: &FlagOpt) -> impl fmt::Display + '_ {
    lazy_format::lazy_format!(match (entry.tags()) {
        Tags::Short { short } => "-{short}",
        Tags::LongShort { long, short } => "-{short}, --{long}",
    })
}
