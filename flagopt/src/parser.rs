/*!
The [`Parser`] owns the raw command line and the registry of accepted
entries, and runs the single parsing pass over them.
*/

use std::{io, process};

use flagopt_parser::{Arg, ArgAccess, ArgumentsParser, Visitor};
use tracing::{debug, trace};

use crate::{
    entry::FlagOpt,
    errors::{DuplicateError, ParseError, Tag},
    matches::Matches,
    printers::{print_help, write_parse_error},
    registry::Registry,
};

/// The short name of the built-in help flag. Finding this key in the
/// results after the scan means help was requested.
pub const HELP_SHORT: char = 'h';

/// The long name of the built-in help flag
pub const HELP_LONG: &str = "help";

/// Help text is wrapped to this many columns unless configured otherwise
pub const DEFAULT_HELP_WIDTH: usize = 80;

/// What a successful call to [`Parser::parse`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The command line matched the registered entries
    Parsed(Matches<'a>),

    /// No arguments were given at all, or `-h`/`--help` appeared somewhere
    /// on the command line. The caller should print usage and stop.
    HelpRequested,
}

/**
A command line parser.

A `Parser` is created with the full command line (including the program
name, which is never matched), then has its flags, options, and positional
arguments registered, and is finally asked to [`parse`][Parser::parse].
The help flag `-h, --help` is registered by the constructor, so it always
takes precedence over caller registrations that collide with it.
*/
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<String>,
    registry: Registry,
    help_width: usize,
}

impl Parser {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut parser = Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            registry: Registry::default(),
            help_width: DEFAULT_HELP_WIDTH,
        };

        parser.add_flag(HELP_SHORT, HELP_LONG, "Show this help message");
        parser
    }

    /// Create a parser from the process's own command line. Arguments that
    /// aren't valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os()
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Set the width that help text is wrapped to.
    #[must_use]
    pub fn with_help_width(mut self, width: usize) -> Self {
        self.help_width = width;
        self
    }

    /// Register a boolean flag. If the short or long name is already taken,
    /// a diagnostic is printed to stderr and the flag is ignored.
    pub fn add_flag(
        &mut self,
        short: char,
        long: impl Into<String>,
        help: impl Into<String>,
    ) -> &mut Self {
        self.add_or_report(FlagOpt::flag(short, long, help))
    }

    /// Register an option, which takes the following token as its value. If
    /// the short or long name is already taken, a diagnostic is printed to
    /// stderr and the option is ignored.
    pub fn add_option(
        &mut self,
        short: char,
        long: impl Into<String>,
        help: impl Into<String>,
    ) -> &mut Self {
        self.add_or_report(FlagOpt::option(short, long, help))
    }

    /// Register a positional argument. Arguments are filled in the order
    /// they're registered. If the short or long name is already taken, a
    /// diagnostic is printed to stderr and the argument is ignored.
    pub fn add_argument(
        &mut self,
        short: char,
        long: impl Into<String>,
        help: impl Into<String>,
    ) -> &mut Self {
        self.add_or_report(FlagOpt::argument(short, long, help))
    }

    /// Register an entry, returning an error instead of printing one if its
    /// name is already taken.
    pub fn try_add(&mut self, entry: FlagOpt) -> Result<(), DuplicateError> {
        match self.registry.insert(entry) {
            Ok(entry) => {
                debug!(short = %entry.short(), long = entry.long(), kind = ?entry.kind(), "registered");
                Ok(())
            }
            Err(error) => {
                debug!(short = %error.entry().short(), long = error.entry().long(), "rejected duplicate");
                Err(error)
            }
        }
    }

    fn add_or_report(&mut self, entry: FlagOpt) -> &mut Self {
        self.add_reporting_to(entry, &mut io::stderr().lock())
    }

    /// Register an entry, writing the diagnostic to `out` if its name is
    /// already taken. Registration carries on either way.
    fn add_reporting_to(
        &mut self,
        entry: FlagOpt,
        out: &mut (impl io::Write + ?Sized),
    ) -> &mut Self {
        if let Err(error) = self.try_add(entry) {
            // Nowhere left to report a failed diagnostic
            let _ = writeln!(out, "{error}");
        }

        self
    }

    /// The program name, from the first token. Empty if there were no
    /// tokens at all.
    #[must_use]
    pub fn program(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    /// All registered entries, in registration order
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &FlagOpt> {
        self.registry.entries()
    }

    /// The registered positional arguments, in the order they're filled
    pub fn positionals(&self) -> impl ExactSizeIterator<Item = &FlagOpt> {
        self.registry.positionals()
    }

    /**
    Run the parse over the command line.

    Tokens are handled left to right, once each:

    - `--name` matches a flag or option by long name.
    - `-abc` matches each character as a flag or option by short name.
    - Anything else fills the next positional argument.

    An option always takes the next whole token as its value, even from
    the middle of a cluster: with `-ab x y`, if `a` is an option it gets
    `x`, and `b` is then handled on its own (taking `y` if it's also an
    option). Prefer putting options last in a cluster.

    If the command line is empty, or the help flag appears anywhere in it,
    the result is [`Outcome::HelpRequested`]. The help flag is only noticed
    after the whole scan, so an error that comes earlier in the scan is
    reported instead.
    */
    pub fn parse(&self) -> Result<Outcome<'_>, ParseError<'_>> {
        let args = match self.tokens.get(1..) {
            Some(args) if !args.is_empty() => args,
            _ => {
                debug!("no arguments given");
                return Ok(Outcome::HelpRequested);
            }
        };

        let mut state = ParseState {
            registry: &self.registry,
            matches: Matches::default(),
            filled: 0,
        };

        let mut arguments = ArgumentsParser::new(args.iter().map(String::as_str));

        while let Some(result) = arguments.next_arg(&mut state) {
            result?;
        }

        if state.matches.contains(HELP_SHORT) {
            debug!("help flag was given");
            return Ok(Outcome::HelpRequested);
        }

        let missing: Vec<&str> = self
            .registry
            .positionals()
            .skip(state.filled)
            .map(FlagOpt::long)
            .collect();

        if !missing.is_empty() {
            return Err(ParseError::TooFewArguments { missing });
        }

        debug!(count = state.matches.len(), "parsed command line");
        Ok(Outcome::Parsed(state.matches))
    }

    /// Write the usage message for this parser
    pub fn write_help(&self, out: &mut (impl io::Write + ?Sized)) -> io::Result<()> {
        print_help(out, self.program(), &self.registry, self.help_width)
    }

    /**
    Parse the command line, exiting the process if that doesn't produce a
    [`Matches`].

    If help was requested, the usage message is printed to stdout and the
    process exits successfully. If there was an error, a one-line diagnostic
    is printed to stderr and the process exits with status 1.
    */
    pub fn parse_or_exit(&self) -> Matches<'_> {
        match self.parse() {
            Ok(Outcome::Parsed(matches)) => matches,
            Ok(Outcome::HelpRequested) => {
                let _ = self.write_help(&mut io::stdout().lock());
                process::exit(0)
            }
            Err(error) => {
                let _ = write_parse_error(&mut io::stderr().lock(), self.program(), &error);
                process::exit(1)
            }
        }
    }
}

/// The in-progress state of a single `parse` call
struct ParseState<'a> {
    registry: &'a Registry,
    matches: Matches<'a>,

    /// How many positional arguments have been filled so far
    filled: usize,
}

impl<'a> ParseState<'a> {
    fn record(
        &mut self,
        entry: &FlagOpt,
        tag: Tag<'a>,
        arg: impl ArgAccess<'a>,
    ) -> Result<(), ParseError<'a>> {
        // Only flags and options are reachable by name, so a value-taking
        // entry here is always an option
        let value = if entry.takes_value() {
            arg.take()
                .ok_or(ParseError::MissingValue { tag })?
                .as_str()
        } else {
            ""
        };

        trace!(%tag, value, "matched");
        self.matches.insert(entry.short(), value);
        Ok(())
    }
}

impl<'a> Visitor<'a> for &mut ParseState<'a> {
    type Value = Result<(), ParseError<'a>>;

    fn visit_positional(self, argument: Arg<'a>) -> Self::Value {
        let value = argument.as_str();
        let entry = self
            .registry
            .positional(self.filled)
            .ok_or(ParseError::UnmatchedPositional { value })?;

        trace!(value, argument = entry.long(), "positional");
        self.filled += 1;
        self.matches.insert(entry.short(), value);
        Ok(())
    }

    fn visit_lone_dash(self, argument: Arg<'a>) -> Self::Value {
        Err(ParseError::LoneDash {
            token: argument.as_str(),
        })
    }

    fn visit_long(self, option: Arg<'a>, arg: impl ArgAccess<'a>) -> Self::Value {
        let tag = Tag::Long(option.as_str());
        let registry = self.registry;
        let entry = registry
            .named_long(option.as_str())
            .ok_or(ParseError::Unrecognised { tag })?;

        self.record(entry, tag, arg)
    }

    fn visit_short(self, option: char, arg: impl ArgAccess<'a>) -> Self::Value {
        let tag = Tag::Short(option);
        let registry = self.registry;
        let entry = registry
            .named_short(option)
            .ok_or(ParseError::Unrecognised { tag })?;

        self.record(entry, tag, arg)
    }
}
