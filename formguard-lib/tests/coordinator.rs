//! End-to-end behaviour of the coordinator against an in-memory surface.

use formguard_lib::{
    Coordinator, EventOutcome, FieldId, FormConfig, FormEvent, FormSurface, MemorySurface,
    RenderState, StyleClass,
};

fn form() -> Coordinator<MemorySurface> {
    Coordinator::new(MemorySurface::new())
}

/// Type into a field and deliver the value-changed event.
fn type_into(form: &mut Coordinator<MemorySurface>, field: FieldId, value: &str) -> EventOutcome {
    form.surface_mut().type_value(field, value);
    form.dispatch(FormEvent::Input(field))
}

fn fill_valid(form: &mut Coordinator<MemorySurface>) {
    type_into(form, FieldId::Email, "a@b.com");
    type_into(form, FieldId::Country, "United States");
    type_into(form, FieldId::Postal, "12345");
    type_into(form, FieldId::Password, "LongEnough1");
    type_into(form, FieldId::Confirm, "LongEnough1");
}

#[test]
fn test_untouched_fields_render_blank_while_typing() {
    let mut form = form();
    for field in FieldId::ALL {
        assert_eq!(type_into(&mut form, field, "x"), EventOutcome::Rendered);
        assert_eq!(form.surface().rendered(field), RenderState::blank());
        assert!(!form.surface().is_active(field));
    }
}

#[test]
fn test_blur_touches_and_renders() {
    let mut form = form();
    type_into(&mut form, FieldId::Email, "not-an-email");
    form.dispatch(FormEvent::Blur(FieldId::Email));

    assert!(form.state().is_touched(FieldId::Email));
    assert_eq!(form.surface().style(FieldId::Email), StyleClass::Invalid);
    assert_eq!(form.surface().error(FieldId::Email), "Please enter a valid email.");
    assert!(form.surface().is_active(FieldId::Email));
}

#[test]
fn test_touched_field_updates_on_every_input() {
    let mut form = form();
    type_into(&mut form, FieldId::Email, "a@");
    form.dispatch(FormEvent::Blur(FieldId::Email));
    assert_eq!(form.surface().style(FieldId::Email), StyleClass::Invalid);

    type_into(&mut form, FieldId::Email, "a@b.com");
    assert_eq!(form.surface().rendered(FieldId::Email), RenderState::valid());
    assert!(!form.surface().is_active(FieldId::Email));

    type_into(&mut form, FieldId::Email, "a@b.");
    assert_eq!(form.surface().style(FieldId::Email), StyleClass::Invalid);
}

#[test]
fn test_input_only_renders_its_own_field() {
    let mut form = form();
    form.dispatch(FormEvent::Blur(FieldId::Country));
    assert_eq!(form.surface().style(FieldId::Country), StyleClass::Invalid);

    form.dispatch(FormEvent::Blur(FieldId::Email));
    type_into(&mut form, FieldId::Email, "a@b.com");
    // Country was not re-rendered and keeps its earlier state.
    assert_eq!(form.surface().style(FieldId::Country), StyleClass::Invalid);
}

#[test]
fn test_focus_on_plain_field_is_ignored() {
    let mut form = form();
    assert_eq!(
        form.dispatch(FormEvent::Focus(FieldId::Email)),
        EventOutcome::Ignored
    );
    assert!(!form.state().is_touched(FieldId::Email));
}

#[test]
fn test_postal_focus_prompts_for_country() {
    let mut form = form();
    type_into(&mut form, FieldId::Country, "Atlantis");
    assert_eq!(
        form.dispatch(FormEvent::Focus(FieldId::Postal)),
        EventOutcome::Rendered
    );

    assert!(form.state().is_touched(FieldId::Postal));
    assert_eq!(
        form.surface().rendered(FieldId::Postal),
        RenderState::invalid("Please select a valid country first.")
    );

    // The prompt stays whatever is typed into postal.
    type_into(&mut form, FieldId::Postal, "12345");
    assert_eq!(
        form.surface().error(FieldId::Postal),
        "Please select a valid country first."
    );
}

#[test]
fn test_postal_with_valid_country() {
    let mut form = form();
    type_into(&mut form, FieldId::Country, "United States");
    form.dispatch(FormEvent::Focus(FieldId::Postal));
    assert_eq!(
        form.surface().error(FieldId::Postal),
        "Please enter a valid postal code for the selected country."
    );

    type_into(&mut form, FieldId::Postal, "12345-6789");
    assert_eq!(form.surface().rendered(FieldId::Postal), RenderState::valid());
}

#[test]
fn test_postal_fails_closed_for_country_without_pattern() {
    let mut form = form();
    type_into(&mut form, FieldId::Country, "Japan");
    type_into(&mut form, FieldId::Postal, "100-0001");
    form.dispatch(FormEvent::Blur(FieldId::Postal));
    assert_eq!(form.surface().style(FieldId::Postal), StyleClass::Invalid);
}

#[test]
fn test_password_message_lists_missing_requirements() {
    let mut form = form();
    type_into(&mut form, FieldId::Password, "short");
    form.dispatch(FormEvent::Blur(FieldId::Password));
    assert_eq!(
        form.surface().error(FieldId::Password),
        "Password must contain at least 10 characters, one capital letter, one number."
    );

    type_into(&mut form, FieldId::Password, "shortButLong");
    assert_eq!(
        form.surface().error(FieldId::Password),
        "Password must contain one number."
    );
}

#[test]
fn test_confirm_focus_rejected_while_password_incomplete() {
    let mut form = form();
    type_into(&mut form, FieldId::Password, "short");
    form.surface_mut().focus(FieldId::Confirm);

    assert_eq!(
        form.dispatch(FormEvent::Focus(FieldId::Confirm)),
        EventOutcome::FocusRejected
    );
    assert_eq!(form.surface().focused(), None);
    assert!(form.state().is_touched(FieldId::Confirm));
    assert_eq!(
        form.surface().error(FieldId::Confirm),
        "Please complete password first."
    );
    assert!(form.surface().is_active(FieldId::Confirm));
}

#[test]
fn test_confirm_focus_allowed_once_password_complete() {
    let mut form = form();
    type_into(&mut form, FieldId::Password, "LongEnough1");
    form.surface_mut().focus(FieldId::Confirm);

    assert_eq!(
        form.dispatch(FormEvent::Focus(FieldId::Confirm)),
        EventOutcome::Rendered
    );
    assert_eq!(form.surface().focused(), Some(FieldId::Confirm));
    assert_eq!(form.surface().error(FieldId::Confirm), "Passwords do not match.");

    type_into(&mut form, FieldId::Confirm, "LongEnough1");
    assert_eq!(form.surface().rendered(FieldId::Confirm), RenderState::valid());
}

#[test]
fn test_submit_invalid_touches_everything_without_reset() {
    let mut form = form();
    type_into(&mut form, FieldId::Email, "a@b.com");
    type_into(&mut form, FieldId::Country, "Atlantis");

    assert_eq!(form.dispatch(FormEvent::Submit), EventOutcome::Rejected);

    for field in FieldId::ALL {
        assert!(form.state().is_touched(field), "{} not touched", field);
    }
    assert_eq!(form.surface().rendered(FieldId::Email), RenderState::valid());
    assert_eq!(
        form.surface().error(FieldId::Country),
        "Please enter a top 25 country by population."
    );
    assert_eq!(
        form.surface().error(FieldId::Postal),
        "Please select a valid country first."
    );
    assert_eq!(form.surface().error(FieldId::Confirm), "Passwords do not match.");
    assert_eq!(form.surface().value(FieldId::Email), "a@b.com");
    assert!(form.surface().acknowledgments().is_empty());
}

#[test]
fn test_submit_valid_acknowledges_and_resets() {
    let mut form = form();
    fill_valid(&mut form);
    assert!(form.is_valid());

    assert_eq!(form.dispatch(FormEvent::Submit), EventOutcome::Submitted);

    assert_eq!(
        form.surface().acknowledgments(),
        ["Congratulations! Your form was submitted successfully."]
    );
    for field in FieldId::ALL {
        assert_eq!(form.surface().value(field), "");
        assert!(!form.state().is_touched(field));
        assert_eq!(form.surface().rendered(field), RenderState::blank());
    }
}

#[test]
fn test_form_is_gated_again_after_successful_submit() {
    let mut form = form();
    fill_valid(&mut form);
    form.dispatch(FormEvent::Submit);

    type_into(&mut form, FieldId::Email, "nope");
    assert_eq!(form.surface().rendered(FieldId::Email), RenderState::blank());
}

#[test]
fn test_aggregate_validity_ignores_touched_state() {
    let mut form = form();
    fill_valid(&mut form);
    assert!(FieldId::ALL.into_iter().all(|f| !form.state().is_touched(f)));
    assert!(form.is_valid());

    form.surface_mut().type_value(FieldId::Confirm, "LongEnough2");
    assert!(!form.is_valid());
}

#[test]
fn test_validate_reads_current_surface_values() {
    let mut form = form();
    form.dispatch(FormEvent::Blur(FieldId::Country));
    form.surface_mut().type_value(FieldId::Country, "India");
    assert_eq!(form.validate(FieldId::Country), RenderState::valid());
}

#[test]
fn test_configured_success_message() {
    let config = FormConfig {
        success_message: "Thanks!".to_string(),
        ..FormConfig::default()
    };
    let mut form = Coordinator::with_config(MemorySurface::new(), config);
    fill_valid(&mut form);
    form.dispatch(FormEvent::Submit);
    assert_eq!(form.surface().acknowledgments(), ["Thanks!"]);
}
