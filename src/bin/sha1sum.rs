use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rust_sha1::{sum_sources, Source};

/// Print SHA-1 (160-bit) checksums.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Files to hash; with no FILE, or when FILE is -, read standard input
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let program = env::args().next().unwrap_or_else(|| String::from("sha1sum"));
    let args = Args::parse();

    let sources: Vec<Source> = if args.files.is_empty() {
        vec![Source::Stdin]
    } else {
        args.files.into_iter().map(Source::from).collect()
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match sum_sources(&program, &sources, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {}", program, e);
            ExitCode::FAILURE
        }
    }
}
