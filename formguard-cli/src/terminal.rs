//! Terminal rendering surface.

use std::io::Write;

use formguard_lib::{FieldId, FormSurface, MemorySurface, StyleClass};
use log::warn;

/// Prints every visible change to a writer.
///
/// Field state is kept in a [`MemorySurface`]; this type only reports the
/// differences as they are written.
pub struct TerminalSurface<W: Write> {
    inner: MemorySurface,
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            inner: MemorySurface::new(),
            out,
        }
    }

    pub fn inner(&self) -> &MemorySurface {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut MemorySurface {
        &mut self.inner
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Print one line per field: value, style and error.
    pub fn show(&mut self) {
        for field in FieldId::ALL {
            let value = display_value(field, &self.inner.value(field));
            let style = match self.inner.style(field) {
                StyleClass::None => "-",
                style => style.as_str(),
            };
            let line = format!(
                "{:<9}{:<24}{:<8}{}",
                field.name(),
                value,
                style,
                self.inner.error(field)
            );
            self.print(line.trim_end());
        }
    }

    pub fn print(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("failed to write to terminal: {}", e);
        }
    }
}

/// Mask secret fields.
fn display_value(field: FieldId, value: &str) -> String {
    match field {
        FieldId::Password | FieldId::Confirm => "*".repeat(value.chars().count()),
        _ => format!("{:?}", value),
    }
}

impl<W: Write> FormSurface for TerminalSurface<W> {
    fn value(&self, field: FieldId) -> String {
        self.inner.value(field)
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        if self.inner.value(field) != value {
            self.inner.set_value(field, value);
            let shown = display_value(field, value);
            self.print(&format!("{} = {}", field, shown));
        }
    }

    fn set_style(&mut self, field: FieldId, style: StyleClass) {
        if self.inner.style(field) != style {
            self.inner.set_style(field, style);
            let name = match style {
                StyleClass::None => "unstyled",
                style => style.as_str(),
            };
            self.print(&format!("{} is {}", field, name));
        }
    }

    fn set_error(&mut self, field: FieldId, error: Option<&str>) {
        let current = self.inner.error(field);
        if current == error.unwrap_or("") {
            return;
        }
        self.inner.set_error(field, error);
        match error {
            Some(text) => self.print(&format!("{}: {}", field, text)),
            None => self.print(&format!("{}: ok", field)),
        }
    }

    fn release_focus(&mut self, field: FieldId) {
        self.inner.release_focus(field);
        self.print(&format!("{} lost focus", field));
    }

    fn acknowledge(&mut self, message: &str) {
        self.inner.acknowledge(message);
        self.print(&format!(">> {}", message));
    }
}
