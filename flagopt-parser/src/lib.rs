#![no_std]

/*!
Low-level implementation of argument handling. Takes care of distinctions
between flags, options, and positionals, that sort of thing. No registry
lookups happen here; whether a given `--name` or `-c` takes a value is up to
the [`Visitor`]. Usually this is too low level to use directly.
*/

mod arg;
mod populated_str;

pub use arg::Arg;

use populated_str::PopulatedStr;

/**
The [`ArgumentsParser`] type operates by passing arguments it finds into a
[`Visitor`], to be handled.
 */
pub trait Visitor<'arg> {
    type Value;

    /// A positional parameter. Anything that doesn't start with `-`,
    /// including the empty string.
    fn visit_positional(self, argument: Arg<'arg>) -> Self::Value;

    /// A lone `-` or `--`. Neither names anything.
    fn visit_lone_dash(self, argument: Arg<'arg>) -> Self::Value;

    /// A long option or flag, such as `--option`
    fn visit_long(self, option: Arg<'arg>, arg: impl ArgAccess<'arg>) -> Self::Value;

    /// A short option or flag, such as `-o`. A cluster like `-abc` is
    /// visited once per character.
    fn visit_short(self, option: char, arg: impl ArgAccess<'arg>) -> Self::Value;
}

/**
[`ArgAccess`] allows a visitor to decide if a given parameter needs an argument,
based on the identity of the flag or option.

Consider `--foo bar`. Is this a pair of parameters (the flag `--foo` and the
positional parameter `bar`) or a single option `--foo bar` that takes an
argument? The [`ArgumentsParser`] can't independently classify a given
argument, so instead, a visitor can request an argument via this trait only
for options that need them.

The argument is always the next whole token on the command line, even when
the option sits in the middle of a short cluster. Given `-ab x y` where both
`a` and `b` take values, `a` gets `x` and `b` gets `y`; the remaining
characters of a cluster are never used as a value.
*/
pub trait ArgAccess<'arg>: Sized {
    /**
    Get an argument from the parser. This should only be called by options
    that need it; flags should simply ignore it, to ensure that the next
    command line argument can correctly be parsed independently.

    This returns [`None`] if all of the CLI arguments have been exhausted.
    The token is handed over as-is, even if it starts with a `-`.
    */
    fn take(self) -> Option<Arg<'arg>>;
}

#[derive(Debug, Clone, Copy)]
enum State<'arg> {
    Ready,
    ShortInProgress(PopulatedStr<'arg>),
}

/**
An `ArgumentsParser` is the main entry point into `flagopt_parser`. It parses
arguments in each call to `next_arg`, sending those arguments to the given
[`Visitor`]. It handles distinguishing flags, options, and positionals, and
walking through clustered short flags one character at a time.

[flagopt-parser][crate] operates entirely on borrowed data, because we assume
that command-line arguments can be loaded early on in `main` and then handled
in a borrowed form for the rest of the program. The ubiquitous `'arg` lifetime
refers to this borrowed command line data.
*/
#[derive(Debug, Clone)]
pub struct ArgumentsParser<'arg, I> {
    state: State<'arg>,
    args: I,
}

impl<'arg, I> ArgumentsParser<'arg, I>
where
    I: Iterator<Item = &'arg str>,
{
    /**
    Create a new [`ArgumentsParser`] from an iterator of string slices, where
    each slice is a single argument received from the command line. This
    list should *exclude* the name of the program, which is commonly passed
    as the first argument in the list.
     */
    #[inline]
    #[must_use]
    pub fn new(args: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            state: State::Ready,
            args: args.into_iter(),
        }
    }

    /// Visit the first character of `short`, leaving the rest (if any) in
    /// progress for the next call.
    #[inline]
    fn handle_short<V>(&mut self, short: PopulatedStr<'arg>, visitor: V) -> V::Value
    where
        V: Visitor<'arg>,
    {
        let (option, rest) = short.split_first();

        self.state = match PopulatedStr::new(rest) {
            None => State::Ready,
            Some(rest) => State::ShortInProgress(rest),
        };

        visitor.visit_short(
            option,
            NextArgAccess {
                args: &mut self.args,
            },
        )
    }

    pub fn next_arg<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        match self.state {
            State::Ready => Some(match self.args.next()? {
                argument @ ("-" | "--") => visitor.visit_lone_dash(Arg(argument)),
                argument => match argument.strip_prefix("--") {
                    Some(option) => visitor.visit_long(
                        Arg(option),
                        NextArgAccess {
                            args: &mut self.args,
                        },
                    ),
                    None => match argument.strip_prefix('-').and_then(PopulatedStr::new) {
                        Some(short) => self.handle_short(short, visitor),
                        None => visitor.visit_positional(Arg(argument)),
                    },
                },
            }),
            State::ShortInProgress(short) => Some(self.handle_short(short, visitor)),
        }
    }
}

/// ArgAccess implementation that gets the next whole argument from the list.
struct NextArgAccess<'a, I> {
    args: &'a mut I,
}

impl<'arg, I> ArgAccess<'arg> for NextArgAccess<'_, I>
where
    I: Iterator<Item = &'arg str>,
{
    #[inline]
    fn take(self) -> Option<Arg<'arg>> {
        self.args.next().map(Arg)
    }
}
