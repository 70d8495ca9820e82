/*!
A small, registry-driven command line parser. Register the flags, options,
and positional arguments your program accepts on a [`Parser`], then call
[`parse`][Parser::parse] once to get back a [`Matches`] map from each
supplied entry's short name to its value.

```
use flagopt::{Outcome, Parser};

let mut parser = Parser::new(["copy", "-vm", "644", "a.txt", "b.txt"]);

parser
    .add_flag('v', "verbose", "Print each file as it's copied")
    .add_option('m', "mode", "Permission bits for the destination")
    .add_argument('s', "source", "File to read")
    .add_argument('d', "dest", "File to write");

let Ok(Outcome::Parsed(matches)) = parser.parse() else {
    panic!("expected a successful parse");
};

assert_eq!(matches.get('v'), Some(""));
assert_eq!(matches.get('m'), Some("644"));
assert_eq!(matches.get('s'), Some("a.txt"));
assert_eq!(matches.get('d'), Some("b.txt"));
```

Everything is a string: there's no type coercion, no default values, and an
option that appears more than once keeps only its last value. `-h` and
`--help` are always registered. Most programs will want
[`parse_or_exit`][Parser::parse_or_exit], which prints usage or a diagnostic
and exits the process when parsing doesn't produce a [`Matches`].
*/

pub mod entry;
pub mod errors;
mod matches;
pub mod parser;
mod printers;
mod registry;

pub use entry::{FlagOpt, Kind};
pub use errors::{DuplicateError, ParseError, Tag};
pub use matches::Matches;
pub use parser::{Outcome, Parser};

/// The set of tags that identify a particular entry (`-short`, `--long`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tags<'a> {
    /// This entry has no long name
    Short { short: char },

    /// This entry has both a long and short name
    LongShort { long: &'a str, short: char },
}
