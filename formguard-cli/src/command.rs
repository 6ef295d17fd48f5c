//! Line commands that play the part of the browser's event source.

use std::str::FromStr;

use formguard_lib::FieldId;

use crate::error::CliError;

pub const HELP: &str = "\
commands:
  set <field> <value>   type a value (the rest of the line) into a field
  focus <field>         focus a field
  blur <field>          leave a field
  submit                submit the form
  show                  print every field
  help                  print this help
  quit                  end the session
fields: email, country, postal, password, confirm";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FieldId, String),
    Focus(FieldId),
    Blur(FieldId),
    Submit,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse a line, returning `None` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Option<Result<Self, CliError>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some(line.trim_start().parse())
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(s);
        match word {
            "set" => {
                let (field, value) = split_word(rest);
                Ok(Self::Set(field_arg("set", field)?, value.to_string()))
            }
            "focus" => Ok(Self::Focus(field_arg("focus", split_word(rest).0)?)),
            "blur" => Ok(Self::Blur(field_arg("blur", split_word(rest).0)?)),
            "submit" => Ok(Self::Submit),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

/// Split off the first whitespace-delimited word.
///
/// The remainder keeps its trailing whitespace; only the separator is dropped.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s.trim_end(), ""),
    }
}

fn field_arg(command: &'static str, name: &str) -> Result<FieldId, CliError> {
    if name.is_empty() {
        return Err(CliError::MissingField(command));
    }
    Ok(name.parse()?)
}
