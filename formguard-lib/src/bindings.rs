//! Event-to-handler table.
//!
//! Every `(target, kind)` pair the form reacts to is bound once at setup.
//! Handlers are plain functions over a [`HandlerContext`], so they can be run
//! against any [`FormSurface`] without going through the coordinator.

use std::collections::HashMap;

use log::{debug, info};

use crate::event::{EventKind, EventOutcome, Target};
use crate::field::{FieldId, FormState};
use crate::message::{COMPLETE_PASSWORD_FIRST, Messages};
use crate::render::StyleClass;
use crate::rules;
use crate::surface::FormSurface;

/// Everything a handler may read or write.
pub struct HandlerContext<'a> {
    pub state: &'a mut FormState,
    pub messages: &'a Messages,
    pub success_message: &'a str,
    pub surface: &'a mut dyn FormSurface,
}

impl HandlerContext<'_> {
    /// Validate a field and push the result to the surface.
    pub fn render(&mut self, field: FieldId) {
        let render = self.state.validate(field, self.messages);
        debug!("render {}: {:?} {:?}", field, render.style, render.error);
        self.surface.apply(field, &render);
    }

    pub fn render_all(&mut self) {
        for field in FieldId::ALL {
            self.render(field);
        }
    }
}

/// A bound event handler.
pub type Handler = fn(&mut HandlerContext<'_>, Target) -> EventOutcome;

/// Table of event handlers keyed by target and event kind.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    handlers: HashMap<(Target, EventKind), Handler>,
}

impl Bindings {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The signup form's wiring: input and blur on every field, focus guards
    /// on postal and confirm, and submission on the form.
    pub fn signup_form() -> Self {
        let mut bindings = Self::new();
        for field in FieldId::ALL {
            bindings.bind(Target::Field(field), EventKind::Input, on_input);
            bindings.bind(Target::Field(field), EventKind::Blur, on_blur);
        }
        for field in FieldId::ALL.into_iter().filter(|f| f.touched_on_focus()) {
            bindings.bind(Target::Field(field), EventKind::Focus, on_focus);
        }
        bindings.bind(Target::Form, EventKind::Submit, on_submit);
        bindings
    }

    /// Bind a handler, replacing any previous one for the same pair.
    pub fn bind(&mut self, target: Target, kind: EventKind, handler: Handler) {
        self.handlers.insert((target, kind), handler);
    }

    /// Look up the handler for a pair.
    pub fn get(&self, target: Target, kind: EventKind) -> Option<Handler> {
        self.handlers.get(&(target, kind)).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Value changed: re-render the field (blank until touched).
pub fn on_input(cx: &mut HandlerContext<'_>, target: Target) -> EventOutcome {
    let Target::Field(field) = target else {
        return EventOutcome::Ignored;
    };
    cx.render(field);
    EventOutcome::Rendered
}

/// Focus lost: the field is touched from now on.
pub fn on_blur(cx: &mut HandlerContext<'_>, target: Target) -> EventOutcome {
    let Target::Field(field) = target else {
        return EventOutcome::Ignored;
    };
    cx.state.touch(field);
    cx.render(field);
    EventOutcome::Rendered
}

/// Focus gained on a guarded field: the field is touched and rendered at
/// once, so postal shows the country prompt before any typing. Confirm
/// refuses focus while the password is incomplete.
pub fn on_focus(cx: &mut HandlerContext<'_>, target: Target) -> EventOutcome {
    let Target::Field(field) = target else {
        return EventOutcome::Ignored;
    };
    cx.state.touch(field);
    if field == FieldId::Confirm
        && !rules::password_missing(cx.state.value(FieldId::Password)).is_empty()
    {
        cx.surface.release_focus(field);
        cx.surface.set_style(field, StyleClass::Invalid);
        cx.surface.set_error(field, Some(COMPLETE_PASSWORD_FIRST));
        return EventOutcome::FocusRejected;
    }
    cx.render(field);
    EventOutcome::Rendered
}

/// Submit attempted: show every field's verdict, then accept and clear the
/// form only if all of them hold.
pub fn on_submit(cx: &mut HandlerContext<'_>, _target: Target) -> EventOutcome {
    cx.state.touch_all();
    cx.render_all();

    if !cx.state.all_valid() {
        let invalid: Vec<&str> = FieldId::ALL
            .into_iter()
            .filter(|&field| !cx.state.is_valid(field))
            .map(FieldId::name)
            .collect();
        info!("submission rejected, invalid fields: {}", invalid.join(", "));
        return EventOutcome::Rejected;
    }

    info!("submission accepted");
    cx.surface.acknowledge(cx.success_message);
    cx.state.reset();
    for field in FieldId::ALL {
        cx.surface.set_value(field, "");
    }
    cx.render_all();
    EventOutcome::Submitted
}
