use clap::Parser;
use mintex_core::filter;
use mintex_latex::MintedRewriter;
use std::io;
use std::process;

/// Document-conversion filter that typesets code with the minted package.
///
/// The conversion driver invokes the filter once per document, passing the
/// serialized tree on standard input and the target output format as the
/// first argument, and reads the rewritten tree back from standard output.
#[derive(Parser)]
#[command(
    name = "mintex",
    version,
    about = "Rewrite code nodes as minted commands for LaTeX output"
)]
struct Cli {
    /// Target output format supplied by the conversion driver.
    format: Option<String>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    let format = cli.format.unwrap_or_default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    filter::run(stdin.lock(), stdout.lock(), &format, &MintedRewriter)
        .unwrap_or_else(|err| die(&err.to_string()));
}
