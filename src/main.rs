use std::{error::Error, io, path::PathBuf};

use calc::repl::{ReplOptions, ScriptInput, run};
use clap::Parser;
use rustyline::DefaultEditor;

/// Evaluates `<number> <operator> <number>` lines using + - * /.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read input lines from a file instead of the terminal.
    #[arg(index(1))]
    path: Option<PathBuf>,
    /// Prompt shown before each line.
    #[arg(short, long, default_value = "> ")]
    prompt: String,
    /// Skip the startup banner.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let options = ReplOptions {
        prompt: args.prompt,
        banner: !args.quiet,
    };
    let mut out = io::stdout();

    let session = if let Some(path) = args.path {
        log::debug!("reading input from {}", path.display());
        run(&mut ScriptInput::from_path(&path)?, &mut out, &options)?
    } else {
        run(&mut DefaultEditor::new()?, &mut out, &options)?
    };
    log::debug!("session ended with last result {:?}", session.last_result);

    Ok(())
}
