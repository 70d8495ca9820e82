use std::collections::{BTreeMap, btree_map};

/**
The result of a successful parse: a map from each supplied entry's short name
to its value.

Presence of a key is what signals that a flag, option, or argument was given
on the command line. Flags always map to the empty string; options and
arguments map to the token that was supplied for them (which might also be
empty, so use [`contains`][Matches::contains] rather than checking the value).
Values borrow from the [`Parser`][crate::Parser] that produced them.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches<'a> {
    values: BTreeMap<char, &'a str>,
}

impl<'a> Matches<'a> {
    /// Record a value, replacing any earlier value for the same entry.
    pub(crate) fn insert(&mut self, short: char, value: &'a str) {
        if let Some(previous) = self.values.insert(short, value) {
            tracing::trace!(%short, previous, value, "replaced earlier value");
        }
    }

    /// Get the value supplied for an entry, by its short name
    #[inline]
    #[must_use]
    pub fn get(&self, short: char) -> Option<&'a str> {
        self.values.get(&short).copied()
    }

    /// Check if an entry was supplied, by its short name
    #[inline]
    #[must_use]
    pub fn contains(&self, short: char) -> bool {
        self.values.contains_key(&short)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the supplied entries, in order of short name
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (char, &'a str)> + '_ {
        self.values.iter().map(|(&short, &value)| (short, value))
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<char, &'a str> {
        self.values
    }
}

impl<'a> IntoIterator for Matches<'a> {
    type Item = (char, &'a str);
    type IntoIter = btree_map::IntoIter<char, &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_win() {
        let mut matches = Matches::default();

        matches.insert('o', "first");
        matches.insert('o', "second");

        assert_eq!(matches.get('o'), Some("second"));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn empty_value_still_counts_as_present() {
        let mut matches = Matches::default();
        matches.insert('v', "");

        assert!(matches.contains('v'));
        assert_eq!(matches.get('v'), Some(""));
        assert!(!matches.contains('q'));
    }

    #[test]
    fn iterates_in_key_order() {
        let mut matches = Matches::default();
        matches.insert('z', "1");
        matches.insert('a', "2");

        let keys: Vec<char> = matches.iter().map(|(short, _)| short).collect();
        assert_eq!(keys, ['a', 'z']);

        let owned: Vec<(char, &str)> = matches.into_iter().collect();
        assert_eq!(owned, [('a', "2"), ('z', "1")]);
    }
}
