use std::collections::HashMap;

use crate::{
    entry::{FlagOpt, Kind},
    errors::DuplicateError,
};

/**
The set of registered entries, indexed by short name and by long name.

Both indexes point into `entries`, which keeps registration order so that
help output is stable. Empty long names aren't indexed, so they never
collide and never match a `--` lookup. Argument entries are additionally
listed in `positionals`, in registration order, which is the order they're
filled in during parsing.
*/
#[derive(Debug, Clone, Default)]
pub(crate) struct Registry {
    entries: Vec<FlagOpt>,
    by_short: HashMap<char, usize>,
    by_long: HashMap<String, usize>,
    positionals: Vec<usize>,
}

impl Registry {
    /// Insert an entry, unless its short name or non-empty long name is
    /// already taken. Agrees with [`FlagOpt::collides_with`] against every
    /// existing entry.
    pub fn insert(&mut self, entry: FlagOpt) -> Result<&FlagOpt, DuplicateError> {
        let taken = self.by_short.contains_key(&entry.short())
            || (!entry.long().is_empty() && self.by_long.contains_key(entry.long()));

        if taken {
            return Err(DuplicateError::new(entry));
        }

        let index = self.entries.len();

        self.by_short.insert(entry.short(), index);
        if !entry.long().is_empty() {
            self.by_long.insert(entry.long().to_owned(), index);
        }
        if entry.is_positional() {
            self.positionals.push(index);
        }

        self.entries.push(entry);
        Ok(&self.entries[index])
    }

    /// Look up a flag or option by its short name. Arguments are never
    /// returned.
    pub fn named_short(&self, short: char) -> Option<&FlagOpt> {
        self.by_short
            .get(&short)
            .map(|&index| &self.entries[index])
            .filter(|entry| entry.kind() != Kind::Argument)
    }

    /// Look up a flag or option by its long name. Arguments are never
    /// returned.
    pub fn named_long(&self, long: &str) -> Option<&FlagOpt> {
        self.by_long
            .get(long)
            .map(|&index| &self.entries[index])
            .filter(|entry| entry.kind() != Kind::Argument)
    }

    /// The `index`th positional argument, in registration order
    pub fn positional(&self, index: usize) -> Option<&FlagOpt> {
        self.positionals
            .get(index)
            .map(|&index| &self.entries[index])
    }

    pub fn positionals(&self) -> impl ExactSizeIterator<Item = &FlagOpt> + Clone {
        self.positionals.iter().map(|&index| &self.entries[index])
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &FlagOpt> + Clone {
        self.entries.iter()
    }

    /// Flags and options, in registration order
    pub fn named(&self) -> impl Iterator<Item = &FlagOpt> + Clone {
        self.entries.iter().filter(|entry| !entry.is_positional())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_short() {
        let mut registry = Registry::default();

        registry
            .insert(FlagOpt::flag('v', "verbose", "first"))
            .unwrap();
        let error = registry
            .insert(FlagOpt::option('v', "value", "second"))
            .unwrap_err();

        assert_eq!(error.entry().help(), "second");
        assert_eq!(registry.entries().len(), 1);
        assert!(registry.named_long("value").is_none());
        assert_eq!(registry.named_short('v').unwrap().help(), "first");
    }

    #[test]
    fn rejects_duplicate_long() {
        let mut registry = Registry::default();

        registry
            .insert(FlagOpt::flag('v', "verbose", "first"))
            .unwrap();
        assert!(registry.insert(FlagOpt::flag('w', "verbose", "")).is_err());
        assert!(registry.named_short('w').is_none());
    }

    #[test]
    fn accepts_several_empty_longs() {
        let mut registry = Registry::default();

        registry.insert(FlagOpt::flag('a', "", "")).unwrap();
        registry.insert(FlagOpt::flag('b', "", "")).unwrap();

        assert_eq!(registry.entries().len(), 2);
        assert!(registry.named_long("").is_none());
    }

    #[test]
    fn agrees_with_collides_with() {
        let candidates = [
            FlagOpt::flag('a', "alpha", ""),
            FlagOpt::option('b', "alpha", ""),
            FlagOpt::argument('a', "beta", ""),
            FlagOpt::flag('c', "", ""),
            FlagOpt::flag('d', "", ""),
            FlagOpt::argument('e', "gamma", ""),
        ];

        let mut registry = Registry::default();

        for candidate in candidates {
            let expected = registry
                .entries()
                .any(|existing| existing.collides_with(&candidate));
            assert_eq!(registry.insert(candidate).is_err(), expected);
        }
    }

    #[test]
    fn positionals_only_grow_on_success() {
        let mut registry = Registry::default();

        registry.insert(FlagOpt::argument('s', "source", "")).unwrap();
        registry
            .insert(FlagOpt::argument('s', "other", ""))
            .unwrap_err();
        registry.insert(FlagOpt::argument('d', "dest", "")).unwrap();

        let order: Vec<&str> = registry.positionals().map(FlagOpt::long).collect();
        assert_eq!(order, ["source", "dest"]);
        assert_eq!(registry.positional(1).unwrap().short(), 'd');
        assert!(registry.positional(2).is_none());
    }

    #[test]
    fn arguments_are_not_named() {
        let mut registry = Registry::default();

        registry.insert(FlagOpt::argument('s', "source", "")).unwrap();

        assert!(registry.named_short('s').is_none());
        assert!(registry.named_long("source").is_none());
        assert_eq!(registry.named().count(), 0);
    }
}
