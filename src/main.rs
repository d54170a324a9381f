use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use calcline::{evaluate, interpreter::evaluator::core::Context, util::num::format_value};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// calcline evaluates arithmetic expressions one line at a time.
///
/// Lines are read from the arguments, a file or standard input, and share one
/// set of variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads lines from this file instead of standard input.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expressions")]
    file: Option<String>,

    /// Assigns a variable before the first line, e.g. `-D rate=0.2`.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE")]
    defines: Vec<String>,

    /// Does not define `PI`.
    #[arg(long)]
    no_constants: bool,

    /// Prints only the value of each line.
    #[arg(short, long)]
    quiet: bool,

    /// Expressions to evaluate in order. Standard input is read when none are
    /// given.
    expressions: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry().with(filter)
                                  .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                                  .init();
}

/// Evaluates each line and writes its result to `out`, or its error to
/// `errors`. Blank lines are skipped. Returns `false` if any line failed.
fn run<I, O, E>(lines: I,
                context: &mut Context,
                quiet: bool,
                out: &mut O,
                errors: &mut E)
                -> io::Result<bool>
    where I: IntoIterator<Item = String>,
          O: Write,
          E: Write
{
    let mut ok = true;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        match evaluate(&line, context) {
            Ok(result) if quiet => writeln!(out, "{}", format_value(result.value))?,
            Ok(result) => writeln!(out, "{result}")?,
            Err(e) => {
                writeln!(errors, "error: {e}")?;
                ok = false;
            },
        }
    }

    Ok(ok)
}

/// Assigns each `NAME=VALUE` definition. `VALUE` may be any expression.
fn seed(context: &mut Context, defines: &[String]) -> Result<(), String> {
    for define in defines {
        if !define.contains('=') {
            return Err(format!("'{define}' is not of the form NAME=VALUE."));
        }
        evaluate(define, context).map_err(|e| format!("in definition '{define}': {e}"))?;
        debug!(define = define.as_str(), "seeded variable");
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let mut context = if args.no_constants {
        Context::new()
    } else {
        Context::with_constants()
    };

    if let Err(e) = seed(&mut context, &args.defines) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let mut out = io::stdout().lock();
    let mut errors = io::stderr().lock();

    let result = if let Some(path) = &args.file {
        let Ok(contents) = fs::read_to_string(path) else {
            eprintln!("error: failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        run(contents.lines().map(str::to_string),
            &mut context,
            args.quiet,
            &mut out,
            &mut errors)
    } else if args.expressions.is_empty() {
        let stdin = io::stdin().lock();
        let lines = stdin.lines().map_while(|line| {
                                     line.map_err(|e| warn!(error = %e, "stopped reading standard input"))
                                         .ok()
                                 });
        run(lines, &mut context, args.quiet, &mut out, &mut errors)
    } else {
        run(args.expressions, &mut context, args.quiet, &mut out, &mut errors)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            warn!(error = %e, "failed to write output");
            ExitCode::FAILURE
        },
    }
}
