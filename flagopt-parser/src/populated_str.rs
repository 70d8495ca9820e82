/// A string slice that is guaranteed to contain at least one character. The
/// first character is split off up front, so getting it back can't fail.
#[derive(Debug, Clone, Copy)]
pub struct PopulatedStr<'a> {
    first: char,
    rest: &'a str,
}

impl<'a> PopulatedStr<'a> {
    #[inline]
    pub fn new(s: &'a str) -> Option<Self> {
        let mut chars = s.chars();

        chars.next().map(|first| Self {
            first,
            rest: chars.as_str(),
        })
    }

    #[inline]
    pub fn split_first(self) -> (char, &'a str) {
        (self.first, self.rest)
    }
}
