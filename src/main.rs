use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use srcnorm::error::NormError;
use srcnorm::format::{self, FileRecord};

/// srcnorm — standardize C/C++/C# sources to UTF-8 (no BOM) with CRLF line endings.
/// Binary-looking and read-only files are left alone.
#[derive(Parser)]
#[command(
    name = "srcnorm",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SRCNORM_BUILD_COMMIT"), ")"),
    about
)]
struct Cli {
    /// Directory to standardize, recursively.
    dir: Option<PathBuf>,

    /// Machine-readable JSON report instead of per-file lines.
    #[arg(long)]
    json: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "srcnorm", &mut io::stdout());
        return;
    }

    srcnorm::logging::init();

    if let Err(e) = run(cli) {
        eprintln!("ERROR: {e}");
        if matches!(e, NormError::MissingArgument) {
            eprintln!("usage: srcnorm <DIR>");
        }
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), NormError> {
    let root = cli.dir.ok_or(NormError::MissingArgument)?;
    srcnorm::check_root(&root)?;

    if !cli.json {
        println!("{}", format::banner());
    }

    let files = srcnorm::discover(&root)?;

    if cli.json {
        let mut records = Vec::with_capacity(files.len());
        let tally = srcnorm::process_all(&files, |path, outcome| {
            records.push(FileRecord::new(path, outcome));
        });
        let json = format::json_report(&root, &records, &tally);
        println!(
            "{}",
            serde_json::to_string_pretty(&json)
                .expect("serde_json::Value is always serializable")
        );
        return Ok(());
    }

    if files.is_empty() {
        println!("{}", format::no_matches());
        return Ok(());
    }

    println!("{}", format::found(files.len()));
    let tally = srcnorm::process_all(&files, |path, outcome| {
        println!("{}", format::outcome_line(path, outcome));
    });
    println!("{}", format::summary(&tally));
    Ok(())
}
