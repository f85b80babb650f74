use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use loxlex::report::exit_code;
use owo_colors::OwoColorize;
use tracing::info;

mod logging;

#[derive(Parser)]
#[command(name = "loxlex", version, about = "A tokenizer for a small C-like scripting language")]
struct Cli {
    /// Log filter for diagnostics on stderr (e.g. `debug`, `loxlex::lexer=trace`)
    #[arg(
        long,
        global = true,
        env = "LOXLEX_LOG",
        default_value = logging::DEFAULT_FILTER,
        value_parser = logging::parse_filter
    )]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Tokenize {
        /// Path to the source file
        filename: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_code::USAGE_OR_IO
            } else {
                exit_code::SUCCESS
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    logging::init(&cli.log_level);

    let code = match cli.command {
        Command::Tokenize { filename } => tokenize(&filename),
    };
    process::exit(code);
}

fn tokenize(path: &Path) -> i32 {
    let source = match loxlex::loader::load(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return exit_code::USAGE_OR_IO;
        }
    };

    let result = loxlex::scan(&source);
    for token in &result.tokens {
        println!("{token}");
    }

    info!(
        path = %path.display(),
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "tokenize finished"
    );
    result.exit_code()
}
