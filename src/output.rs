//! Terminal formatting for search results

use crate::index::types::{QuoteRecord, SearchResult};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print results to stdout, highlighting `query` inside context windows
pub fn print_results(results: &[SearchResult], query: &str, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_results(&mut stdout, results, query)
}

/// Write results to any color-capable writer
pub fn write_results<W: WriteColor>(
    out: &mut W,
    results: &[SearchResult],
    query: &str,
) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No results.")?;
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        match result {
            SearchResult::Context(hit) => write_context(out, &hit.context, query)?,
            SearchResult::Quote(record) => write_quote(out, record)?,
        }
    }

    Ok(())
}

/// Context window with every exact occurrence of `query` highlighted
fn write_context<W: WriteColor>(out: &mut W, context: &str, query: &str) -> io::Result<()> {
    write!(out, "...")?;

    let mut rest = context;
    if !query.is_empty() {
        while let Some(pos) = rest.find(query) {
            write!(out, "{}", &rest[..pos])?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "{}", query)?;
            out.reset()?;
            rest = &rest[pos + query.len()..];
        }
    }

    writeln!(out, "{}...", rest)
}

fn write_quote<W: WriteColor>(out: &mut W, record: &QuoteRecord) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}", record.title)?;
    out.reset()?;

    write!(out, " ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", record.location)?;
    out.reset()?;
    writeln!(out)?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{}", record.speaker)?;
    out.reset()?;
    writeln!(out, ": {}", record.quote)
}
