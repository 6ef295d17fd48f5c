//! Field identifiers and per-field form state.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::message::{Messages, SELECT_COUNTRY_FIRST};
use crate::render::RenderState;
use crate::rules;

/// One of the fixed form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Email,
    Country,
    Postal,
    Password,
    Confirm,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Email,
        FieldId::Country,
        FieldId::Postal,
        FieldId::Password,
        FieldId::Confirm,
    ];

    /// The field's name as used by the markup and the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Country => "country",
            Self::Postal => "postal",
            Self::Password => "password",
            Self::Confirm => "confirm",
        }
    }

    /// Whether focusing this field counts as touching it.
    pub fn touched_on_focus(self) -> bool {
        matches!(self, Self::Postal | Self::Confirm)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A single form field: its raw value and whether it has been touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
    pub touched: bool,
}

impl Field {
    fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            touched: false,
        }
    }
}

/// The state of every field on the form.
///
/// Validity is never stored; it is recomputed from the raw values each time
/// it is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: [Field; 5],
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.map(Field::new),
        }
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        self.fields[id.index()].value = value.into();
    }

    pub fn is_touched(&self, id: FieldId) -> bool {
        self.field(id).touched
    }

    pub fn touch(&mut self, id: FieldId) {
        self.fields[id.index()].touched = true;
    }

    /// Mark every field touched, as a submit attempt does.
    pub fn touch_all(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
        }
    }

    /// Clear every value and touched flag, returning to the pristine form.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.touched = false;
        }
    }

    /// Evaluate a field's rule against the current raw values.
    ///
    /// Ignores touched state.
    pub fn is_valid(&self, id: FieldId) -> bool {
        let value = self.value(id);
        match id {
            FieldId::Email => rules::is_valid_email(value),
            FieldId::Country => rules::is_valid_country(value),
            FieldId::Postal => rules::is_valid_postal(self.value(FieldId::Country), value),
            FieldId::Password => rules::password_missing(value).is_empty(),
            FieldId::Confirm => rules::is_valid_confirm(value, self.value(FieldId::Password)),
        }
    }

    /// Aggregate validity: every field's rule holds.
    pub fn all_valid(&self) -> bool {
        FieldId::ALL.into_iter().all(|id| self.is_valid(id))
    }

    /// Compute what a field should display.
    ///
    /// Untouched fields render blank. A touched postal field with an invalid
    /// country shows the country prompt instead of its own message.
    pub fn validate(&self, id: FieldId, messages: &Messages) -> RenderState {
        if !self.is_touched(id) {
            return RenderState::blank();
        }
        if id == FieldId::Postal && !rules::is_valid_country(self.value(FieldId::Country)) {
            return RenderState::invalid(SELECT_COUNTRY_FIRST);
        }
        if self.is_valid(id) {
            RenderState::valid()
        } else {
            RenderState::invalid(messages.get(id).resolve(self.value(id)))
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::StyleClass;

    #[test]
    fn test_field_names_round_trip() {
        for id in FieldId::ALL {
            assert_eq!(id.name().parse::<FieldId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_field_name() {
        assert_eq!(
            "zip".parse::<FieldId>(),
            Err(FormError::UnknownField("zip".to_string()))
        );
    }

    #[test]
    fn test_untouched_renders_blank() {
        let mut state = FormState::new();
        state.set_value(FieldId::Email, "nope");
        assert_eq!(
            state.validate(FieldId::Email, &Messages::default()),
            RenderState::blank()
        );
    }

    #[test]
    fn test_touched_invalid_email() {
        let mut state = FormState::new();
        state.set_value(FieldId::Email, "nope");
        state.touch(FieldId::Email);
        let render = state.validate(FieldId::Email, &Messages::default());
        assert_eq!(render.style, StyleClass::Invalid);
        assert_eq!(render.error, "Please enter a valid email.");
    }

    #[test]
    fn test_postal_requires_country_regardless_of_value() {
        let mut state = FormState::new();
        state.set_value(FieldId::Country, "Atlantis");
        state.touch(FieldId::Postal);
        for postal in ["", "12345", "SW1A 1AA"] {
            state.set_value(FieldId::Postal, postal);
            let render = state.validate(FieldId::Postal, &Messages::default());
            assert_eq!(render, RenderState::invalid(SELECT_COUNTRY_FIRST));
        }
    }

    #[test]
    fn test_postal_with_valid_country() {
        let mut state = FormState::new();
        state.set_value(FieldId::Country, "United States");
        state.set_value(FieldId::Postal, "12345-6789");
        state.touch(FieldId::Postal);
        assert_eq!(
            state.validate(FieldId::Postal, &Messages::default()),
            RenderState::valid()
        );

        state.set_value(FieldId::Postal, "1234");
        assert_eq!(
            state.validate(FieldId::Postal, &Messages::default()).error,
            "Please enter a valid postal code for the selected country."
        );
    }

    #[test]
    fn test_validity_ignores_touched() {
        let mut state = FormState::new();
        state.set_value(FieldId::Email, "a@b.com");
        assert!(state.is_valid(FieldId::Email));
        assert!(!state.is_touched(FieldId::Email));
    }

    #[test]
    fn test_reset_clears_values_and_touched() {
        let mut state = FormState::new();
        state.set_value(FieldId::Password, "LongEnough1");
        state.touch_all();
        state.reset();
        assert_eq!(state, FormState::new());
    }
}
