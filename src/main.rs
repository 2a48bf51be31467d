use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    process::ExitCode,
    sync::Mutex,
};

use clap::Parser;
use prattle::{
    Failure, Session, SessionConfig,
    interpreter::{evaluator::function::BUILTIN_FUNCTIONS, parser::DEFAULT_MAX_DEPTH},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

const BANNER: &str = "\
============================
         Calculator
============================";

/// prattle evaluates arithmetic expressions with variables and the builtin
/// functions sqrt, log, sin, cos and exp.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as the path of a script with one expression per
    /// line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Deepest expression nesting accepted before giving up.
    #[arg(long, env = "PRATTLE_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,

    /// Append log lines to this file instead of standard error.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// The expression to evaluate. Starts an interactive session when
    /// omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    let mut session = Session::with_config(SessionConfig { max_depth: args.max_depth });

    match args.contents {
        None => run_repl(&mut session),
        Some(path) if args.file => run_script(&mut session, &path),
        Some(expression) => run_expression(&mut session, &expression),
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the default level, which is `debug` with `--debug`,
/// `info` when writing to a log file and `warn` otherwise.
fn init_logging(args: &Args) -> std::io::Result<()> {
    let default_level = if args.debug {
        Level::DEBUG
    } else if args.log_file.is_some() {
        Level::INFO
    } else {
        Level::WARN
    };
    let filter = EnvFilter::builder().with_default_directive(default_level.into())
                                     .from_env_lossy();
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = &args.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}

/// Submits one expression and logs the outcome.
fn evaluate(session: &mut Session, source: &str) -> Result<Option<f64>, Failure> {
    let result = session.submit(source);
    match &result {
        Ok(Some(value)) => info!("Expression: {source} = {value}"),
        Ok(None) => {},
        Err(failure) => info!(stage = %failure.stage,
                              kind = %failure.kind,
                              "Error in expression '{source}': {}",
                              failure.message),
    }
    result
}

fn run_expression(session: &mut Session, expression: &str) -> ExitCode {
    match evaluate(session, expression) {
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("{failure}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates a script line by line in one session. Blank lines and lines
/// starting with `#` are skipped.
fn run_script(session: &mut Session, path: &str) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match evaluate(session, line) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(failure) => {
                eprintln!("Error on line {}: {failure}", index + 1);
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

fn run_repl(session: &mut Session) -> ExitCode {
    match repl_loop(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn repl_loop(session: &mut Session) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("{BANNER}");

    loop {
        let line = match rl.readline("calc >> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        };

        let input = line.trim();
        if !input.is_empty() {
            rl.add_history_entry(input)?;
        }

        match input {
            "exit" | "quit" => break,
            "reset" => {
                session.reset();
                println!("All variables cleared.");
            },
            "vars" => {
                for (name, value) in session.environment().bindings() {
                    println!("{name} = {value}");
                }
            },
            "help" => {
                println!("Enter an expression such as `x = 2 * (3 + 4)`.");
                println!("Functions: {}", BUILTIN_FUNCTIONS.join(", "));
                println!("Commands: vars, reset, help, exit");
            },
            _ => match evaluate(session, input) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => {},
                Err(failure) => println!("{failure}"),
            },
        }
    }

    Ok(())
}
