//! tkc CLI binary.
//!
//! Count BPE tokens in a string, file(s), or standard input.
//!
//! ```text
//! tkc [-tv] [MODEL|ENCODING] "[STRING|FILE|-]..."
//! tkc [-hl]
//! ```
//!
//! Set `-` to read from stdin. Exit codes: 0 on success (including `-h`
//! and `-l`), 2 on usage errors, 1 on anything else.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use tkc::{
    encoding::{self, Encoding},
    input, output, tokenizer, Config, OutputMode, TkcError, VERSION,
};

/// Command line surface.
#[derive(Parser)]
#[command(name = "tkc")]
#[command(version = VERSION)]
#[command(about = "Count BPE tokens in text, files, or standard input", long_about = None)]
#[command(override_usage = "tkc [-tv] [MODEL|ENCODING] \"[STRING|FILE|-]...\"\n       tkc [-hl]")]
struct Cli {
    /// List every known encoding name, one per line, and exit
    #[arg(short, long)]
    list: bool,

    /// Print the token IDs; given twice, print the input text unchanged
    #[arg(short, long, action = ArgAction::Count)]
    tokens: u8,

    /// Quiet: no file diagnostics, bare count output
    #[arg(short = 'v', long, action = ArgAction::Count)]
    quiet: u8,

    /// Model or encoding name, then text, file paths, or "-" for stdin
    #[arg(value_name = "MODEL|ENCODING|TEXT")]
    args: Vec<String>,
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            // Usage shares stderr with the File:/error diagnostics;
            // stdout stays reserved for the result line.
            eprint!("{err}");
            std::process::exit(0);
        }
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            print!("{err}");
            std::process::exit(0);
        }
        Err(err) => {
            // Unknown flags and other parse failures.
            let _ = err.print();
            std::process::exit(2);
        }
    };

    if cli.list {
        for name in Encoding::names() {
            println!("{name}");
        }
        return;
    }

    match run(&cli) {
        Ok(line) => println!("{line}"),
        Err(TkcError::Usage(_)) => {
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// Run the pipeline and produce the single result line.
fn run(cli: &Cli) -> tkc::Result<String> {
    let config = Config::load()?;
    let quiet = cli.quiet > 0;

    let plan = input::plan(&cli.args)?;
    let text = input::gather(&plan.source, quiet)?;
    let resolution = encoding::resolve(&plan, text, &config.tokenizer);

    let ids = tokenizer::encode(&resolution.text, resolution.encoding)?;
    let mode = OutputMode::from_flags(cli.tokens, quiet);
    Ok(output::render(
        mode,
        &resolution.text,
        &ids,
        resolution.encoding.name(),
    ))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
