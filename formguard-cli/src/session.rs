//! Interactive session: reads commands and feeds events to the coordinator.

use std::io::{BufRead, Write};

use formguard_lib::{Coordinator, EventOutcome, FormEvent};
use log::{info, warn};

use crate::command::{Command, HELP};
use crate::error::CliError;
use crate::terminal::TerminalSurface;

/// Run commands from `input` until it ends or `quit` is read.
///
/// Bad commands are reported and skipped; only I/O errors on the input end
/// the session early.
pub fn run<R: BufRead, W: Write>(
    form: &mut Coordinator<TerminalSurface<W>>,
    input: R,
) -> Result<(), CliError> {
    for line in input.lines() {
        let line = line?;
        let command = match Command::parse_line(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                warn!("rejected command {:?}: {}", line, e);
                form.surface_mut().print(&format!("error: {}", e));
                continue;
            }
        };
        if !execute(form, command) {
            break;
        }
    }
    info!("session ended");
    Ok(())
}

/// Execute one command. Returns `false` when the session should end.
pub fn execute<W: Write>(form: &mut Coordinator<TerminalSurface<W>>, command: Command) -> bool {
    let outcome = match command {
        Command::Set(field, value) => {
            form.surface_mut().inner_mut().type_value(field, value);
            form.dispatch(FormEvent::Input(field))
        }
        Command::Focus(field) => {
            form.surface_mut().inner_mut().focus(field);
            form.dispatch(FormEvent::Focus(field))
        }
        Command::Blur(field) => {
            form.surface_mut().inner_mut().blur();
            form.dispatch(FormEvent::Blur(field))
        }
        Command::Submit => form.dispatch(FormEvent::Submit),
        Command::Show => {
            form.surface_mut().show();
            return true;
        }
        Command::Help => {
            form.surface_mut().print(HELP);
            return true;
        }
        Command::Quit => return false,
    };
    if outcome == EventOutcome::Rejected {
        form.surface_mut().print("form has errors");
    }
    true
}
