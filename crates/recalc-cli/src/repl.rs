#![forbid(unsafe_code)]

//! The read-eval-print loop.
//!
//! One command per line. Arithmetic commands take both operands inline
//! (`add 2 3`); everything else is a bare word. Every calculator failure is
//! rendered as a one-line message and the loop continues; only `exit`, end
//! of input, or a signal ends the session.

use std::io::{self, BufRead, Write};

use recalc::{Calculator, OpKind, format_number};

enum Flow {
    Continue,
    Exit,
}

/// Drive a full session over the given streams.
///
/// Loads the history file on entry (a malformed file is reported and the
/// session starts empty) and saves on exit when auto-save is enabled.
pub fn run<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "recalc — terminal calculator with undo/redo history")?;
    writeln!(output, "Type 'help' for the list of commands.")?;

    match calculator.load_history() {
        Ok(()) => {
            if !calculator.history().is_empty() {
                writeln!(
                    output,
                    "Loaded {} previous calculation(s).",
                    calculator.history().len()
                )?;
            }
        }
        Err(error) => {
            writeln!(
                output,
                "Warning: could not load history ({error}); starting empty."
            )?;
        }
    }

    let mut lines = input.lines();
    loop {
        write!(output, "calc> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            // End of input behaves like `exit`.
            writeln!(output)?;
            break;
        };
        match dispatch(calculator, &line?, output)? {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }

    if calculator.config().auto_save {
        match calculator.save_history() {
            Ok(()) => writeln!(output, "History saved.")?,
            Err(error) => writeln!(output, "Warning: could not save history: {error}")?,
        }
    }
    writeln!(output, "Goodbye.")?;
    Ok(())
}

fn dispatch<W: Write>(
    calculator: &mut Calculator,
    line: &str,
    output: &mut W,
) -> io::Result<Flow> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(Flow::Continue);
    };
    let command = command.to_ascii_lowercase();
    let args: Vec<&str> = tokens.collect();

    match command.as_str() {
        "help" => print_help(output)?,
        "exit" => return Ok(Flow::Exit),
        "history" => {
            if calculator.history().is_empty() {
                writeln!(output, "No calculations in history.")?;
            } else {
                writeln!(output, "Calculation history:")?;
                for (index, entry) in calculator.history().iter().enumerate() {
                    writeln!(output, "{}: {entry}", index + 1)?;
                }
            }
        }
        "undo" => match calculator.undo() {
            Ok(()) => writeln!(output, "Last operation undone.")?,
            Err(_) => writeln!(output, "Nothing to undo.")?,
        },
        "redo" => match calculator.redo() {
            Ok(()) => writeln!(output, "Last operation redone.")?,
            Err(_) => writeln!(output, "Nothing to redo.")?,
        },
        "clear" => {
            calculator.clear_history();
            writeln!(output, "History cleared.")?;
        }
        "save" => match calculator.save_history() {
            Ok(()) => writeln!(output, "History saved.")?,
            Err(error) => writeln!(output, "Error saving history: {error}")?,
        },
        "load" => match calculator.load_history() {
            Ok(()) => writeln!(output, "History loaded.")?,
            Err(error) => writeln!(output, "Error loading history: {error}")?,
        },
        other => {
            if other.parse::<OpKind>().is_ok() {
                if let [a, b] = args.as_slice() {
                    match calculator.evaluate(other, a, b) {
                        Ok(result) => {
                            let precision = calculator.config().precision;
                            writeln!(output, "Result: {}", format_number(result, precision))?;
                        }
                        Err(error) => writeln!(output, "Error: {error}")?,
                    }
                } else {
                    writeln!(output, "usage: {other} <a> <b>")?;
                }
            } else {
                writeln!(
                    output,
                    "Unknown command: {other}. Type 'help' for a list of commands."
                )?;
            }
        }
    }
    Ok(Flow::Continue)
}

fn print_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Available commands:")?;
    writeln!(output, "  add | subtract | multiply | divide | power | root <a> <b>")?;
    writeln!(output, "  history   show the calculation history")?;
    writeln!(output, "  undo      undo the last operation")?;
    writeln!(output, "  redo      redo the last undone operation")?;
    writeln!(output, "  clear     clear the history")?;
    writeln!(output, "  save      save the history to the configured file")?;
    writeln!(output, "  load      load the history from the configured file")?;
    writeln!(output, "  exit      quit (history is saved when auto-save is on)")?;
    Ok(())
}
