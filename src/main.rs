//! Svnlog: parse `svn log -v` output into structured revision and file
//! records.
//!
//! This is the main entry point for the `svnlog` CLI. It selects an input
//! source (file, stdin, or an `svn` subprocess), streams it through the
//! parser, and prints the results as JSON with proper exit codes.

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use svnlog::cli::Cli;
use svnlog::{exit_codes, LogParser, ParseEvent, SvnLogError};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {err:#}");

            let code = err
                .downcast_ref::<SvnLogError>()
                .map(SvnLogError::exit_code)
                .unwrap_or(exit_codes::USER_ERROR);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut parser = LogParser::new();
    let mut stdout = io::stdout().lock();

    if let Some(repo) = cli.repo.as_deref() {
        let log = svnlog::svn::verbose_log(".", Some(repo))
            .with_context(|| format!("running svn log against '{repo}'"))?;
        let events = parser.feed(&log)?;
        emit_events(&mut stdout, &events, cli.events)?;
    } else {
        let reader: Box<dyn BufRead> = match &cli.file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening log file '{}'", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        };
        feed_reader(&mut parser, reader, &mut stdout, cli.events)?;
    }

    let summary = parser.finish()?;
    emit_events(&mut stdout, &summary.events, cli.events)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&summary.results)?
    } else {
        serde_json::to_string(&summary.results)?
    };
    writeln!(stdout, "{json}")?;

    Ok(())
}

/// Feed the parser line-buffered chunks, emitting events as they appear.
fn feed_reader<R: BufRead>(
    parser: &mut LogParser,
    mut reader: R,
    out: &mut impl Write,
    print_events: bool,
) -> anyhow::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).context("reading log input")? == 0 {
            return Ok(());
        }
        let events = parser.feed(&line)?;
        emit_events(out, &events, print_events)?;
    }
}

fn emit_events(
    out: &mut impl Write,
    events: &[ParseEvent],
    print_events: bool,
) -> anyhow::Result<()> {
    if !print_events {
        return Ok(());
    }
    for event in events {
        writeln!(out, "{}", event.to_ndjson_line()?)?;
    }
    Ok(())
}
