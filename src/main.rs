use std::io::{self, BufRead, Write};

use clap::Parser;
use exprtree::{Session, run};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// exprtree builds a binary expression tree from an arithmetic expression,
/// evaluates it and prints its inorder, preorder and postorder traversals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Also print the expression tree as a diagram.
    #[arg(short, long)]
    tree: bool,

    /// Log verbosity; repeat for more (-d info, -dd debug, -ddd trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// The expression to process. Without it, expressions are read from
    /// standard input, one per line.
    expression: Option<String>,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder().with_default_directive(level.into())
                                     .from_env_lossy();

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true)
                                                    .with_filter(filter))
                                  .init();
}

/// Reads expressions line by line until end of input.
///
/// `:tree` prints the last tree that was built successfully. Errors are
/// reported and the loop goes on with the next line.
fn interactive(show_tree: bool) -> io::Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input == ":tree" {
            match session.render() {
                Ok(diagram) => write!(stdout, "{diagram}")?,
                Err(e) => eprintln!("{e}"),
            }
        } else if !input.is_empty() {
            match session.submit(input) {
                Ok(report) => {
                    writeln!(stdout, "{report}")?;
                    if show_tree {
                        match session.render() {
                            Ok(diagram) => write!(stdout, "{diagram}")?,
                            Err(e) => eprintln!("{e}"),
                        }
                    }
                },
                Err(e) => eprintln!("{e}"),
            }
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    writeln!(stdout)
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    match args.expression {
        Some(expression) => match run(&expression, args.tree) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        },
        None => {
            if let Err(e) = interactive(args.tree) {
                eprintln!("Failed to read input: {e}");
                std::process::exit(1);
            }
        },
    }
}
