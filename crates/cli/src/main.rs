use colored::*;
use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
    process,
};
use clap::Parser as ClapParser;
use thiserror::Error;
use tracing::Level;

extern crate frontend;
extern crate runtime;

use frontend::completion;
use runtime::{environment::Env, interpreter::Interpreter};
use tools::errors::CodeErr;

// --------
//   CLI
// --------

#[derive(ClapParser)]
#[command(version)]
#[command(about="Interpreter for CPS scripts")]
struct CLI {
    #[arg(short, long)]
    /// Path to the file to run
    file: Option<String>,

    /// Interactive mode after running a file
    #[arg(short, long)]
    inter: bool,

    /// Prints the parsed program before running it
    #[arg(short, long)]
    ast_print: bool,

    /// Test mode. If argument is 'all', it will run all files in test directory
    #[arg(short, long)]
    test: Option<String>,

    /// Prints the statement templates matching the last word of TEXT
    #[arg(short, long, value_name = "TEXT")]
    complete: Option<String>,

    /// Logs both interpreter passes
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Error opening script file {0}: {1}")]
    OpenFile(String, io::Error),

    #[error("Error reading test directory {0}: {1}")]
    ReadDir(String, io::Error),

    #[error("Error reading from terminal: {0}")]
    Terminal(#[from] io::Error),

    #[error("{0} script(s) failed")]
    FailedScripts(usize),
}

fn open_file(file_path: &str) -> Result<String, CliError> {
    fs::read_to_string(file_path).map_err(|e| CliError::OpenFile(file_path.to_string(), e))
}

fn report(e: &CodeErr) {
    match e.display_line() {
        Some(line) => eprintln!("{} {}", format!("Line {line}:").yellow(), e.to_string().red().bold()),
        None => eprintln!("{}", e.to_string().red().bold()),
    }
}

// Returns false when the script failed
fn interpret_file(file_name: &str, env: &mut Env, cli: &CLI) -> Result<bool, CliError> {
    println!("\nReading source file {}...", file_name.green());
    let source_code = open_file(file_name)?;

    Ok(interpretation_sequence(&source_code, env, cli))
}

fn interpretation_sequence(code: &str, env: &mut Env, cli: &CLI) -> bool {
    let interp = Interpreter {};

    let program = match frontend::parse(code) {
        Ok(program) => program,
        Err(e) => {
            report(&e);
            return false;
        }
    };

    if cli.ast_print {
        println!("\nParsed program:\n{program}");
    }

    // Nothing from a previous run is visible
    env.clear();

    match interp.execute_program(program, env) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            true
        }
        Err(e) => {
            report(&e);
            false
        }
    }
}

// "Con?" completes the last word with the first matching template
fn complete_line(line: &str) -> Option<(String, Vec<&'static str>)> {
    let text = line.strip_suffix('?')?;
    let candidates = completion::complete(text);
    let first = candidates.first()?;

    Some((completion::apply_completion(text, first), candidates))
}

// Lines are buffered until an empty line, then the buffer is run as a whole
fn repl(env: &mut Env, cli: &CLI) -> Result<(), CliError> {
    println!("\n{} mode started", "Interactive".yellow().bold());
    println!("Empty line runs the program, a line ending with '?' is completed, 'quit' exits.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut buffer = String::new();
    let mut input = String::new();

    loop {
        input.clear();
        print!("{} ", if buffer.is_empty() { ">" } else { "." });
        stdout.flush()?;

        // End of input
        if stdin.lock().read_line(&mut input)? == 0 {
            if !buffer.is_empty() {
                interpretation_sequence(&buffer, env, cli);
            }
            return Ok(());
        }

        let trimmed_input = input.trim();

        if trimmed_input == "quit" {
            return Ok(());
        }

        if trimmed_input.is_empty() {
            if !buffer.is_empty() {
                interpretation_sequence(&buffer, env, cli);
                buffer.clear();
            }
            continue;
        }

        if trimmed_input.ends_with('?') {
            match complete_line(trimmed_input) {
                Some((completed, candidates)) => {
                    for cmd in candidates {
                        println!("  {}", cmd.dimmed());
                    }
                    println!("{}", completed.green());
                    buffer.push_str(&completed);
                    buffer.push('\n');
                }
                None => println!("{}", "No statement matches".yellow()),
            }
            continue;
        }

        buffer.push_str(trimmed_input);
        buffer.push('\n');
    }
}

fn run_tests(target: &str, cli: &CLI) -> Result<(), CliError> {
    let mut failed = 0;
    // Cleared before each script, no shared data
    let mut env = Env::new();

    match target {
        "all" => {
            // We get all the files
            let mut paths = fs::read_dir("tests")
                .map_err(|e| CliError::ReadDir("tests".into(), e))?
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "cps"))
                .collect::<Vec<_>>();
            paths.sort();

            for path in paths {
                if !interpret_file(&path.display().to_string(), &mut env, cli)? {
                    failed += 1;
                }
            }
        }
        path => {
            if !Path::new(path).is_file() {
                return Err(CliError::OpenFile(
                    path.to_string(),
                    io::Error::new(io::ErrorKind::NotFound, "not a file"),
                ));
            }

            if !interpret_file(path, &mut env, cli)? {
                failed += 1;
            }
        }
    }

    // Exit after test
    println!();

    if failed > 0 {
        return Err(CliError::FailedScripts(failed));
    }

    Ok(())
}

fn execute(cli: &CLI) -> Result<(), CliError> {
    if let Some(text) = &cli.complete {
        for cmd in completion::complete(text) {
            println!("{cmd}");
        }
        return Ok(());
    }

    // Beginning of program
    println!("\n       --- {} interpreter v0.1 ---", "CPS".cyan().bold());

    let mut env = Env::new();

    if let Some(file_name) = &cli.file {
        let ok = interpret_file(file_name, &mut env, cli)?;

        // If interactive mode, keep going whatever the result
        if cli.inter {
            return repl(&mut env, cli);
        }

        if !ok {
            return Err(CliError::FailedScripts(1));
        }

        Ok(())
    } else if let Some(target) = &cli.test {
        run_tests(target, cli)
    } else {
        repl(&mut env, cli)
    }
}

fn main() {
    // Manage command line args
    let cli = CLI::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(io::stderr)
            .init();
    }

    if let Err(e) = execute(&cli) {
        eprintln!("{}", e.to_string().red());
        process::exit(1);
    }
}
