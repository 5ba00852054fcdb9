/// FSD image dump tool

use clap::Parser;
use fsddump::io::open_source;
use fsddump::{FsdDecoder, FsdError, HeaderStyle, TextDump};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fsd")]
#[command(about = "Dump the contents of an FSD floppy disk image", long_about = None)]
struct Cli {
    /// FSD image file to dump
    image: PathBuf,

    /// Keep the header info bytes raw instead of unpacking the date
    #[arg(long)]
    plain_header: bool,

    /// Skip error and size statistics and the summary
    #[arg(long)]
    no_summary: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    // A missing image argument prints usage to stderr and exits here
    let cli = Cli::parse();

    let file = match open_source(&cli.image) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let style = if cli.plain_header {
        HeaderStyle::Plain
    } else {
        HeaderStyle::Detailed
    };

    let stdout = std::io::stdout();
    let mut dump = TextDump::new(BufWriter::new(stdout.lock()));

    let result = FsdDecoder::new(BufReader::new(file))
        .header_style(style)
        .collect_statistics(!cli.no_summary)
        .decode(&mut dump);

    // Flush what was decoded even when the decode failed
    let flushed = dump.into_inner().map(|_| ());

    match result.and(flushed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(error: &FsdError) {
    match error {
        FsdError::InvalidHeader { .. } => eprintln!("{}", error),
        FsdError::UnexpectedEndOfInput { .. } => {
            eprintln!("Error: {} (output above is incomplete)", error)
        }
        _ => eprintln!("Error: {}", error),
    }
}
