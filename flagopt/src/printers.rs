use std::{fmt::Display, io};

use indent_write::io::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::{
    Tags,
    entry::{FlagOpt, Kind},
    errors::ParseError,
    registry::Registry,
};

/// Help text starts at this column (relative to the section indent)
const HELP_COLUMN: usize = 24;

/// Help text is never wrapped narrower than this, however small the
/// configured width is
const MIN_HELP_WIDTH: usize = 20;

/// The word for a positional argument: its long name, or its short name if
/// it doesn't have one.
fn placeholder(entry: &FlagOpt) -> impl Display + '_ {
    lazy_format!(match (entry.tags()) {
        Tags::Short { short } => "{short}",
        Tags::LongShort { long, .. } => "{long}",
    })
}

fn positional_item(entry: &FlagOpt) -> impl Display + '_ {
    lazy_format!(match (entry.tags()) {
        Tags::Short { short } => "{short}",
        Tags::LongShort { long, short } => "{short}, {long}",
    })
}

fn option_item(entry: &FlagOpt) -> impl Display + '_ {
    let tags = lazy_format!(match (entry.tags()) {
        Tags::Short { short } => "-{short}",
        Tags::LongShort { long, short } => "-{short}, --{long}",
    });

    lazy_format!(match (entry.kind()) {
        Kind::Option => "{tags} <val>",
        Kind::Flag | Kind::Argument => "{tags}",
    })
}

/*
Overall structure:

Usage: command [flags/options] source dest

Arguments:
  s, source             File to read
  d, dest               File to write

Flags/options:
  -h, --help            Show this help message
  -m, --mode <val>      Permission bits for the
                        destination
 */
pub fn print_help(
    out: &mut (impl io::Write + ?Sized),
    program: &str,
    registry: &Registry,
    width: usize,
) -> io::Result<()> {
    let positionals = registry.positionals();

    write!(out, "Usage: {program} [flags/options]")?;
    if positionals.len() > 0 {
        write!(out, " {}", positionals.clone().map(placeholder).join_with(" "))?;
    }
    writeln!(out)?;

    maybe_section(out, "Arguments", positionals, |out, entry| {
        describe(out, positional_item(entry), entry.help(), width)
    })?;

    maybe_section(out, "Flags/options", registry.named(), |out, entry| {
        describe(out, option_item(entry), entry.help(), width)
    })
}

/// Write a one-line diagnostic for a parse error
pub fn write_parse_error(
    out: &mut (impl io::Write + ?Sized),
    program: &str,
    error: &ParseError<'_>,
) -> io::Result<()> {
    match program {
        "" => writeln!(out, "{error}"),
        program => writeln!(out, "{program}: {error}"),
    }
}

/// Write a section by writing a newline, then the `header`, then an
/// indented `body`.
fn section<O: io::Write + ?Sized, T>(
    out: &mut O,
    header: &str,
    body: impl FnOnce(IndentWriter<&mut O>) -> io::Result<T>,
) -> io::Result<T> {
    writeln!(out, "\n{header}:")?;
    body(IndentWriter::new("  ", out))
}

/// Write an optional section, only if the iterator is not empty.
/// Otherwise identical to `section`.
fn maybe_section<O: io::Write + ?Sized, I: IntoIterator>(
    out: &mut O,
    header: &str,
    items: I,
    body: impl Fn(&mut IndentWriter<&mut O>, I::Item) -> io::Result<()>,
) -> io::Result<()> {
    let mut items = items.into_iter();

    match items.next() {
        None => Ok(()),
        Some(first) => section(out, header, |mut out| {
            body(&mut out, first)?;
            items.try_for_each(|item| body(&mut out, item))
        }),
    }
}

/// Describe an item by printing the item, followed by its wrapped help
/// text aligned at `HELP_COLUMN`. If the item reaches into the help column,
/// the help text starts on the next line instead.
fn describe(
    out: &mut (impl io::Write + ?Sized),
    item: impl Display,
    help: &str,
    width: usize,
) -> io::Result<()> {
    let item = item.to_string();
    write!(out, "{item}")?;

    if help.is_empty() {
        return writeln!(out);
    }

    let column = HELP_COLUMN;
    let lines = textwrap::wrap(help, width.saturating_sub(column).max(MIN_HELP_WIDTH));
    let mut lines = lines.iter();

    let padding = match column.checked_sub(textwrap::core::display_width(&item)) {
        Some(space) if space >= 2 => space,
        _ => {
            writeln!(out)?;
            column
        }
    };

    if let Some(first) = lines.next() {
        writeln!(out, "{:padding$}{first}", "")?;
    }

    lines.try_for_each(|line| writeln!(out, "{:column$}{line}", ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(registry: &Registry, width: usize) -> String {
        let mut out = Vec::new();
        print_help(&mut out, "copy", registry, width).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn registry() -> Registry {
        let mut registry = Registry::default();

        registry
            .insert(FlagOpt::flag('h', "help", "Show this help message"))
            .unwrap();
        registry
            .insert(FlagOpt::argument('s', "source", "File to read"))
            .unwrap();
        registry
            .insert(FlagOpt::option('m', "mode", "Permission bits"))
            .unwrap();
        registry
            .insert(FlagOpt::argument('d', "dest", "File to write"))
            .unwrap();
        registry.insert(FlagOpt::flag('q', "", "")).unwrap();

        registry
    }

    #[test]
    fn full_layout() {
        let text = render(&registry(), 80);

        assert_eq!(
            text,
            "Usage: copy [flags/options] source dest\n\
             \n\
             Arguments:\n  \
             s, source               File to read\n  \
             d, dest                 File to write\n\
             \n\
             Flags/options:\n  \
             -h, --help              Show this help message\n  \
             -m, --mode <val>        Permission bits\n  \
             -q\n"
        );
    }

    #[test]
    fn no_arguments_section_without_positionals() {
        let mut registry = Registry::default();
        registry
            .insert(FlagOpt::flag('h', "help", "Show this help message"))
            .unwrap();

        let text = render(&registry, 80);

        assert!(text.starts_with("Usage: copy [flags/options]\n"));
        assert!(!text.contains("Arguments:"));
        assert!(text.contains("Flags/options:"));
    }

    #[test]
    fn arguments_are_not_listed_as_options() {
        let text = render(&registry(), 80);
        let (_, options) = text.split_once("Flags/options:").unwrap();

        assert!(!options.contains("source"));
        assert!(!options.contains("dest"));
    }

    #[test]
    fn long_help_is_wrapped_at_the_column() {
        let mut registry = Registry::default();
        registry
            .insert(FlagOpt::flag(
                'v',
                "verbose",
                "Print every file as it is copied, along with its size",
            ))
            .unwrap();

        let text = render(&registry, 50);
        let lines: Vec<&str> = text.lines().skip(3).collect();

        assert!(lines.len() > 1, "expected wrapping: {text}");
        assert!(lines[0].starts_with("  -v, --verbose           Print"));
        for line in &lines[1..] {
            assert!(line.starts_with(&" ".repeat(2 + HELP_COLUMN)));
        }
    }

    #[test]
    fn long_item_pushes_help_to_next_line() {
        let mut registry = Registry::default();
        registry
            .insert(FlagOpt::option(
                'x',
                "extremely-long-option-name",
                "Something",
            ))
            .unwrap();

        let text = render(&registry, 80);

        assert!(text.contains(
            "  -x, --extremely-long-option-name <val>\n                          Something\n"
        ));
    }

    #[test]
    fn error_line_names_program() {
        let mut out = Vec::new();
        let error = ParseError::UnmatchedPositional { value: "extra" };

        write_parse_error(&mut out, "copy", &error).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "copy: value \"extra\" has no matching argument\n"
        );

        let mut out = Vec::new();
        write_parse_error(&mut out, "", &error).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "value \"extra\" has no matching argument\n"
        );
    }
}
