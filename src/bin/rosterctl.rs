use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use rosterbook::commands::errors::format_cli_error;
use rosterbook::commands::{parser::COMMAND_WORDS, Command, RosterParser};
use rosterbook::{cli_utils, InMemoryModel, Model, SavefileManager};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(optional, "Path to the roster savefile (.json, .yaml, or .yml)")]
    savefile: String,
}

const USAGE: &str = r#"Usage: rosterctl [options] [command ...]

Options:
  --savefile <path>    Roster savefile loaded at startup and rewritten after changes

Commands:
  addstudent n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...   Add a student
  addtutor n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...     Add a tutor
  addclass c/CLASS_NAME                                    Add a tuition class
  join n/PERSON_NAME c/CLASS_NAME                          Join a person into a class
  delete n/PERSON_NAME                                     Delete a person
  list                                                     List all persons and classes

With no command, rosterctl reads commands from stdin, one per line.
In that session, "help" prints this message and "exit" leaves."#;

fn main() {
    let (options, free) =
        Options::from_command_line_relaxed("USAGE: rosterctl [options] [command ...]");

    let model = InMemoryModel::new();
    let manager = if options.savefile.is_empty() {
        None
    } else {
        Some(SavefileManager::new(PathBuf::from(&options.savefile)))
    };

    if let Some(manager) = &manager {
        match manager.load() {
            Ok(Some(savefile)) => {
                if let Err(e) = savefile.restore(&model) {
                    cli_utils::exit_with_error(&format!("Failed to restore savefile: {}", e));
                }
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("{}", format_cli_error(&e));
                std::process::exit(1);
            }
        }
    }

    if free.is_empty() {
        run_session(&model, manager.as_ref());
    } else {
        run_once(&model, manager.as_ref(), &free.join(" "));
    }
}

/// Executes a single command line and exits non-zero on any failure.
fn run_once(model: &dyn Model, manager: Option<&SavefileManager>, line: &str) {
    match run_line(model, manager, line) {
        Ok(feedback) => cli_utils::print_feedback(&feedback),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}

/// Reads commands from stdin until exit or end of input.
fn run_session(model: &dyn Model, manager: Option<&SavefileManager>) {
    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => cli_utils::exit_with_error(&format!("Failed to read input: {}", e)),
        };
        match line.trim() {
            "" => {}
            "help" => println!("{}", USAGE),
            "exit" | "quit" => return,
            command => match run_line(model, manager, command) {
                Ok(feedback) => cli_utils::print_feedback(&feedback),
                Err(message) => eprintln!("{}", message),
            },
        }
        prompt();
    }
}

fn prompt() {
    print!("rosterctl> ");
    io::stdout().flush().ok();
}

/// Parses, executes, and persists one command line.
///
/// The returned error string is fully rendered for the user, including the
/// usage hint when one applies.
fn run_line(
    model: &dyn Model,
    manager: Option<&SavefileManager>,
    line: &str,
) -> Result<String, String> {
    let command = RosterParser.parse(line).map_err(|e| {
        let mut message = format_cli_error(&e);
        if matches!(
            e,
            rosterbook::commands::errors::ParseError::UnknownCommand(_)
        ) {
            message.push_str(&format!("\nAvailable commands: {}", COMMAND_WORDS.join(", ")));
        }
        message
    })?;
    let result = command.execute(model).map_err(|e| format_cli_error(&e))?;
    if let Some(manager) = manager {
        manager.save(model).map_err(|e| format_cli_error(&e))?;
    }
    Ok(result.feedback().to_string())
}
