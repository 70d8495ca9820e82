use std::io::{self, Write as _};

use anyhow::Context as _;
use flagopt::{Kind, Parser};
use lazy_format::lazy_format;
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut parser = Parser::from_env();

    parser
        .add_flag('v', "verbose", "Print each file as it's copied")
        .add_flag('n', "dry-run", "Show what would be copied without copying anything")
        .add_option('m', "mode", "Permission bits to apply to the destination, in octal")
        .add_argument('s', "source", "File to read from")
        .add_argument('d', "dest", "File to write to");

    let matches = parser.parse_or_exit();
    tracing::info!(count = matches.len(), "parsed arguments");

    let mut out = io::stdout().lock();

    for entry in parser.entries() {
        let Some(value) = matches.get(entry.short()) else {
            continue;
        };

        let long = entry.long();
        let line = lazy_format!(match (entry.kind()) {
            Kind::Flag => "{long}",
            Kind::Option | Kind::Argument => "{long}={value}",
        });

        writeln!(out, "{line}").context("failed to write results")?;
    }

    Ok(())
}
