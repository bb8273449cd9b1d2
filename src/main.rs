use std::{
    fs::File,
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use strcalc::{Options, interpreter::evaluator::core::Context, run};
use tracing::Level;

/// strcalc evaluates programs built from digit strings, concatenation (`.`)
/// and repetition (`^`). It prints the syntax tree, then the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells strcalc to treat `contents` as a path to a program file.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Skip printing the syntax tree.
    #[arg(long)]
    no_tree: bool,

    /// Refuse to build any value longer than this many bytes.
    #[arg(long, value_name = "BYTES")]
    max_length: Option<usize>,

    /// Increase diagnostic output (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The program to run. Read from standard input when omitted.
    contents: Option<String>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_max_level(level)
                             .with_ansi(io::stderr().is_terminal())
                             .with_target(false)
                             .without_time()
                             .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = Options { print_tree: !args.no_tree,
                            context:    Context { max_length: args.max_length }, };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match args.contents {
        Some(path) if args.file => {
            let path = PathBuf::from(path);
            let file = File::open(&path).unwrap_or_else(|_| {
                                            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                      path.display());
                                            std::process::exit(1);
                                        });
            run(file, &mut out, &options)
        },
        Some(program) => run(program.as_bytes(), &mut out, &options),
        None => run(io::stdin().lock(), &mut out, &options),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
