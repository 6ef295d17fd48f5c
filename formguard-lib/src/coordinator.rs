//! Field validation coordinator.

use log::debug;

use crate::bindings::{Bindings, HandlerContext};
use crate::config::FormConfig;
use crate::event::{EventOutcome, FormEvent};
use crate::field::{FieldId, FormState};
use crate::message::Messages;
use crate::render::RenderState;
use crate::surface::FormSurface;

/// Owns the form state and reacts to events from a rendering surface.
///
/// # Example
///
/// ```
/// use formguard_lib::{Coordinator, EventOutcome, FieldId, FormEvent, MemorySurface};
///
/// let mut form = Coordinator::new(MemorySurface::new());
/// form.surface_mut().type_value(FieldId::Email, "a@b.com");
/// form.dispatch(FormEvent::Blur(FieldId::Email));
/// assert_eq!(form.surface().style(FieldId::Email).as_str(), "valid");
///
/// assert_eq!(form.dispatch(FormEvent::Submit), EventOutcome::Rejected);
/// ```
pub struct Coordinator<S: FormSurface> {
    surface: S,
    state: FormState,
    messages: Messages,
    config: FormConfig,
    bindings: Bindings,
}

impl<S: FormSurface> Coordinator<S> {
    /// Create a coordinator with the default configuration.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, FormConfig::default())
    }

    /// Create a coordinator with the given configuration.
    pub fn with_config(surface: S, config: FormConfig) -> Self {
        Self {
            surface,
            state: FormState::new(),
            messages: Messages::from_config(&config),
            config,
            bindings: Bindings::signup_form(),
        }
    }

    /// Handle one event from the event source.
    ///
    /// Field values are re-read from the surface first, so the handler sees
    /// whatever the user has typed.
    pub fn dispatch(&mut self, event: FormEvent) -> EventOutcome {
        self.sync_values();

        let Some(handler) = self.bindings.get(event.target(), event.kind()) else {
            debug!("{}: no handler", event);
            return EventOutcome::Ignored;
        };

        let mut cx = HandlerContext {
            state: &mut self.state,
            messages: &self.messages,
            success_message: &self.config.success_message,
            surface: &mut self.surface,
        };
        let outcome = handler(&mut cx, event.target());
        debug!("{}: {:?}", event, outcome);
        outcome
    }

    /// Compute what a field should display, from the surface's current values.
    pub fn validate(&self, field: FieldId) -> RenderState {
        self.snapshot().validate(field, &self.messages)
    }

    /// Whether every field is valid right now, regardless of touched state.
    pub fn is_valid(&self) -> bool {
        self.snapshot().all_valid()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn sync_values(&mut self) {
        for field in FieldId::ALL {
            self.state.set_value(field, self.surface.value(field));
        }
    }

    fn snapshot(&self) -> FormState {
        let mut state = self.state.clone();
        for field in FieldId::ALL {
            state.set_value(field, self.surface.value(field));
        }
        state
    }
}
