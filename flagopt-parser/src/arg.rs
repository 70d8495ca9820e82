use core::fmt;

/**
A single, raw argument passed in from the command line.

This type is used in two ways: to indicate long command line options, and to
indicate arguments themselves. For instance, given `--target foo input.txt`,
`target`, `foo`, and `input.txt` would all be passed as [`Arg`] values to the
relevant visitor methods. Long options arrive with their leading `--` already
stripped.
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arg<'arg>(pub(crate) &'arg str);

impl<'arg> Arg<'arg> {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'arg str {
        self.0
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
