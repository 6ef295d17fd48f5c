//! Rendering surface abstraction.

use std::collections::HashMap;

use crate::field::FieldId;
use crate::render::{RenderState, StyleClass};

/// Whatever displays the form: a DOM, a terminal, a test double.
///
/// The surface owns the live field values; the coordinator reads them at the
/// start of every event and writes styling and error text back.
pub trait FormSurface {
    /// Get the current raw value of a field.
    fn value(&self, field: FieldId) -> String;

    /// Replace the value of a field (used when the form is cleared).
    fn set_value(&mut self, field: FieldId, value: &str);

    /// Set the style classification of a field's input.
    fn set_style(&mut self, field: FieldId, style: StyleClass);

    /// Show an error (text plus "active" marker), or clear both with `None`.
    fn set_error(&mut self, field: FieldId, error: Option<&str>);

    /// Programmatically remove focus from a field.
    ///
    /// Must not feed a focus-lost event back into the coordinator.
    fn release_focus(&mut self, field: FieldId);

    /// Show the submission acknowledgment.
    fn acknowledge(&mut self, message: &str);

    /// Apply a computed render state to a field.
    fn apply(&mut self, field: FieldId, render: &RenderState) {
        self.set_style(field, render.style);
        self.set_error(field, render.error());
    }
}

/// In-memory surface that records everything written to it.
///
/// Lets the coordinator run headless, e.g. in tests or behind another UI.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    values: HashMap<FieldId, String>,
    styles: HashMap<FieldId, StyleClass>,
    errors: HashMap<FieldId, String>,
    focused: Option<FieldId>,
    acknowledgments: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type into a field. Does not notify anyone; dispatch the event separately.
    pub fn type_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Give focus to a field.
    pub fn focus(&mut self, field: FieldId) {
        self.focused = Some(field);
    }

    /// Remove focus from whichever field has it.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    pub fn style(&self, field: FieldId) -> StyleClass {
        self.styles.get(&field).copied().unwrap_or_default()
    }

    /// Current error text, empty when none is shown.
    pub fn error(&self, field: FieldId) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Whether the error display for a field is marked active.
    pub fn is_active(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// What the field currently shows.
    pub fn rendered(&self, field: FieldId) -> RenderState {
        RenderState {
            style: self.style(field),
            error: self.error(field).to_string(),
        }
    }

    pub fn acknowledgments(&self) -> &[String] {
        &self.acknowledgments
    }
}

impl FormSurface for MemorySurface {
    fn value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        self.values.insert(field, value.to_string());
    }

    fn set_style(&mut self, field: FieldId, style: StyleClass) {
        self.styles.insert(field, style);
    }

    fn set_error(&mut self, field: FieldId, error: Option<&str>) {
        match error {
            Some(text) => {
                self.errors.insert(field, text.to_string());
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    fn release_focus(&mut self, field: FieldId) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    fn acknowledge(&mut self, message: &str) {
        self.acknowledgments.push(message.to_string());
    }
}
