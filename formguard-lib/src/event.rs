use std::fmt;

use crate::field::FieldId;

/// What an event is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Field(FieldId),
    Form,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{}", field),
            Self::Form => f.write_str("form"),
        }
    }
}

/// The kind of an event, independent of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The value of a field changed.
    Input,
    /// A field gained focus.
    Focus,
    /// A field lost focus.
    Blur,
    /// The form was submitted.
    Submit,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "input",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Submit => "submit",
        };
        f.write_str(name)
    }
}

/// A notification from the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEvent {
    Input(FieldId),
    Focus(FieldId),
    Blur(FieldId),
    Submit,
}

impl FormEvent {
    pub fn target(self) -> Target {
        match self {
            Self::Input(field) | Self::Focus(field) | Self::Blur(field) => Target::Field(field),
            Self::Submit => Target::Form,
        }
    }

    pub fn kind(self) -> EventKind {
        match self {
            Self::Input(_) => EventKind::Input,
            Self::Focus(_) => EventKind::Focus,
            Self::Blur(_) => EventKind::Blur,
            Self::Submit => EventKind::Submit,
        }
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.kind(), self.target())
    }
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// No handler is bound for this event.
    Ignored,
    /// The target field was re-rendered.
    Rendered,
    /// Focus was refused because a dependency is incomplete.
    FocusRejected,
    /// The form was valid, acknowledged and cleared.
    Submitted,
    /// The form was invalid; per-field errors are shown.
    Rejected,
}
