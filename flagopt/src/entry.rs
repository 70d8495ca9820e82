/*!
Descriptors for the flags, options, and positional arguments a
[`Parser`][crate::Parser] recognizes.
*/

use crate::Tags;

/// What a registered entry does when it's matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A boolean switch; presence alone is the signal
    Flag,

    /// A named switch that consumes the following token as its value
    Option,

    /// A positional parameter, matched by position rather than by name
    Argument,
}

/**
An immutable descriptor of one recognized flag, option, or positional
argument.

The `short` name is the canonical identifier: it's the key used in
[`Matches`][crate::Matches], and it's how the entry is invoked with a single
dash (`-v`, or as part of a cluster like `-vq`). The `long` name is an alias
used with a double dash (`--verbose`); it may be empty, in which case the
entry can only be invoked by its short name. Argument entries are never
invoked by name at all; their names only show up in help output.
*/
#[derive(Debug, Clone)]
pub struct FlagOpt {
    short: char,
    long: String,
    help: String,
    kind: Kind,
}

impl FlagOpt {
    #[must_use]
    pub fn new(short: char, long: impl Into<String>, help: impl Into<String>, kind: Kind) -> Self {
        Self {
            short,
            long: long.into(),
            help: help.into(),
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub fn flag(short: char, long: impl Into<String>, help: impl Into<String>) -> Self {
        Self::new(short, long, help, Kind::Flag)
    }

    #[inline]
    #[must_use]
    pub fn option(short: char, long: impl Into<String>, help: impl Into<String>) -> Self {
        Self::new(short, long, help, Kind::Option)
    }

    #[inline]
    #[must_use]
    pub fn argument(short: char, long: impl Into<String>, help: impl Into<String>) -> Self {
        Self::new(short, long, help, Kind::Argument)
    }

    #[inline]
    #[must_use]
    pub fn short(&self) -> char {
        self.short
    }

    #[inline]
    #[must_use]
    pub fn long(&self) -> &str {
        &self.long
    }

    #[inline]
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Options and arguments carry a value; flags don't.
    #[inline]
    #[must_use]
    pub fn takes_value(&self) -> bool {
        matches!(self.kind, Kind::Option | Kind::Argument)
    }

    #[inline]
    #[must_use]
    pub fn is_positional(&self) -> bool {
        self.kind == Kind::Argument
    }

    /// The tags that identify this entry in help output
    #[must_use]
    pub fn tags(&self) -> Tags<'_> {
        match self.long.as_str() {
            "" => Tags::Short { short: self.short },
            long => Tags::LongShort {
                long,
                short: self.short,
            },
        }
    }

    /**
    Check if two entries share a name. This is the identity used for
    duplicate detection: entries collide if their short names are equal, or
    if their long names are equal and non-empty. Help text and kind play no
    part.

    This is deliberately not a [`PartialEq`] implementation, since it isn't
    transitive: `-a, --x` collides with `-a, --y` and with `-b, --x`, but those
    two don't collide with each other.
    */
    #[must_use]
    pub fn collides_with(&self, other: &FlagOpt) -> bool {
        self.short == other.short || (!self.long.is_empty() && self.long == other.long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collides_on_short_name() {
        let a = FlagOpt::flag('v', "verbose", "Verbose output");
        let b = FlagOpt::option('v', "value", "Some value");

        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn collides_on_long_name() {
        let a = FlagOpt::flag('v', "verbose", "Verbose output");
        let b = FlagOpt::argument('x', "verbose", "");

        assert!(a.collides_with(&b));
    }

    #[test]
    fn empty_long_names_never_collide() {
        let a = FlagOpt::flag('a', "", "");
        let b = FlagOpt::flag('b', "", "");

        assert!(!a.collides_with(&b));
        assert!(!b.collides_with(&a));
    }

    #[test]
    fn short_only_lookup_matches_by_short() {
        let registered = FlagOpt::option('o', "output", "Output file");
        let lookup = FlagOpt::flag('o', "", "");

        assert!(lookup.collides_with(&registered));
        assert!(registered.collides_with(&lookup));
    }

    #[test]
    fn value_taking_kinds() {
        assert!(!FlagOpt::flag('f', "flag", "").takes_value());
        assert!(FlagOpt::option('o', "opt", "").takes_value());
        assert!(FlagOpt::argument('a', "arg", "").takes_value());
        assert!(FlagOpt::argument('a', "arg", "").is_positional());
    }

    #[test]
    fn tags_omit_empty_long() {
        assert!(matches!(
            FlagOpt::flag('q', "", "").tags(),
            Tags::Short { short: 'q' }
        ));
        assert!(matches!(
            FlagOpt::flag('q', "quiet", "").tags(),
            Tags::LongShort {
                long: "quiet",
                short: 'q'
            }
        ));
    }
}
